/// Widens interleaved little-endian i16 PCM into planar `f32` channels in
/// `[-1.0, 1.0)`. A trailing partial frame is dropped.
pub fn widen_pcm16(data: &[u8], channels: u16) -> Vec<Vec<f32>> {
    let channels = usize::from(channels.max(1));
    let frame_count = data.len() / (2 * channels);

    let mut planar = vec![Vec::with_capacity(frame_count); channels];
    for frame in data.chunks_exact(2 * channels).take(frame_count) {
        for (channel, sample) in frame.chunks_exact(2).enumerate() {
            let value = i16::from_le_bytes([sample[0], sample[1]]);
            planar[channel].push(f32::from(value) / 32768.0);
        }
    }

    planar
}
