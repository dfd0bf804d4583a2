/// Swaps the first and third byte of every 4-byte pixel in place.
///
/// Decoded images come as RGBA while the blur works on BGRA, the same swap
/// converts in both directions.
pub fn swap_red_blue(pixels: &mut [u8]) {
    for px in pixels.chunks_exact_mut(4) {
        px.swap(0, 2);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn swaps_channels() {
        let mut data = [1u8, 2, 3, 4, 5, 6, 7, 8];
        swap_red_blue(&mut data);
        assert_eq!(data, [3, 2, 1, 4, 7, 6, 5, 8]);
    }
}
