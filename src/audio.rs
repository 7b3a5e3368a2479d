use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

/// Where the frame loop sources its per-frame spectrum from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputSource {
    /// Synthetic demo spectrum; no audio node is read.
    Demo,
    /// Live analyser data (microphone or decoded file).
    Live,
}

impl InputSource {
    pub fn label(self) -> &'static str {
        match self {
            Self::Demo => "demo",
            Self::Live => "live audio",
        }
    }
}

// Create analyser and an appropriately sized scratch buffer.
// fft_size 256 yields the 128 frequency bins the engine expects.
pub fn create_analyser(
    audio_ctx: &web::AudioContext,
) -> (Option<web::AnalyserNode>, Rc<RefCell<Vec<f32>>>) {
    let analyser: Option<web::AnalyserNode> = web::AnalyserNode::new(audio_ctx).ok();
    if let Some(a) = &analyser {
        a.set_fft_size(256);
    }
    let buf: Rc<RefCell<Vec<f32>>> = Rc::new(RefCell::new(Vec::new()));
    if let Some(a) = &analyser {
        let bins = a.frequency_bin_count() as usize;
        buf.borrow_mut().resize(bins, 0.0);
    }
    (analyser, buf)
}

/// Read the analyser's dB magnitudes and normalize them into [0, 1] bands.
/// Writes as many bands as both buffers can hold; the engine keeps any
/// remaining tail bands from the previous frame.
pub fn read_normalized_spectrum(
    analyser: &web::AnalyserNode,
    scratch: &mut Vec<f32>,
    out: &mut [f32],
) {
    let bins = analyser.frequency_bin_count() as usize;
    if scratch.len() != bins {
        scratch.resize(bins, 0.0);
    }
    analyser.get_float_frequency_data(scratch);
    let n = bins.min(out.len());
    for i in 0..n {
        out[i] = ((scratch[i] + 100.0) / 100.0).clamp(0.0, 1.0);
    }
}

/// Ask for microphone access and route it into the analyser.
/// Permission denial surfaces here as an error; the caller keeps the demo
/// spectrum running in that case.
pub async fn connect_microphone(
    audio_ctx: web::AudioContext,
    analyser: web::AnalyserNode,
) -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let devices = window
        .navigator()
        .media_devices()
        .map_err(|e| anyhow::anyhow!("media devices unavailable: {:?}", e))?;
    let constraints = web::MediaStreamConstraints::new();
    constraints.set_audio(&JsValue::from_bool(true));
    constraints.set_video(&JsValue::from_bool(false));
    let promise = devices
        .get_user_media_with_constraints(&constraints)
        .map_err(|e| anyhow::anyhow!("getUserMedia rejected: {:?}", e))?;
    let stream = JsFuture::from(promise)
        .await
        .map_err(|e| anyhow::anyhow!("microphone permission denied: {:?}", e))?;
    let stream: web::MediaStream = stream
        .dyn_into()
        .map_err(|e| anyhow::anyhow!("unexpected getUserMedia result: {:?}", e))?;
    let source = audio_ctx
        .create_media_stream_source(&stream)
        .map_err(|e| anyhow::anyhow!("MediaStreamAudioSourceNode error: {:?}", e))?;
    source
        .connect_with_audio_node(&analyser)
        .map_err(|e| anyhow::anyhow!("analyser connect error: {:?}", e))?;
    _ = audio_ctx.resume();
    log::info!("[audio] microphone connected");
    Ok(())
}

/// Decode an uploaded audio file and play it looped, feeding the analyser
/// and the speakers. Decode failures surface as errors and leave the demo
/// spectrum running.
pub async fn play_file(
    audio_ctx: web::AudioContext,
    analyser: web::AnalyserNode,
    file: web::File,
) -> anyhow::Result<()> {
    let name = file.name();
    let data = JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| anyhow::anyhow!("file read error: {:?}", e))?;
    let data: js_sys::ArrayBuffer = data
        .dyn_into()
        .map_err(|e| anyhow::anyhow!("unexpected file payload: {:?}", e))?;
    let decode_promise = audio_ctx
        .decode_audio_data(&data)
        .map_err(|e| anyhow::anyhow!("decodeAudioData rejected: {:?}", e))?;
    let decoded = JsFuture::from(decode_promise)
        .await
        .map_err(|e| anyhow::anyhow!("could not decode {name:?}: {:?}", e))?;
    let buffer: web::AudioBuffer = decoded
        .dyn_into()
        .map_err(|e| anyhow::anyhow!("unexpected decode result: {:?}", e))?;

    let src = audio_ctx
        .create_buffer_source()
        .map_err(|e| anyhow::anyhow!("AudioBufferSourceNode error: {:?}", e))?;
    src.set_buffer(Some(&buffer));
    src.set_loop(true);
    src.connect_with_audio_node(&analyser)
        .map_err(|e| anyhow::anyhow!("analyser connect error: {:?}", e))?;
    src.connect_with_audio_node(&audio_ctx.destination())
        .map_err(|e| anyhow::anyhow!("destination connect error: {:?}", e))?;
    src.start()
        .map_err(|e| anyhow::anyhow!("playback start error: {:?}", e))?;
    _ = audio_ctx.resume();
    log::info!("[audio] playing {name:?}");
    Ok(())
}
