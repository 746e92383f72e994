// Simple color struct, created from an unsigned 32 representing 0xRRGGBB

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn from_u32(num: u32) -> Color {
        let r = (num >> 16) as u8;
        let g = (num >> 8) as u8;
        let b = num as u8;

        Color { r, g, b }
    }

    // CSS hex string, as taken by fillStyle / strokeStyle
    pub fn css(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_u32_splits_channels() {
        let c = Color::from_u32(0x08FDD8);
        assert_eq!((c.r, c.g, c.b), (0x08, 0xFD, 0xD8));
    }

    #[test]
    fn css_is_six_digit_hex() {
        assert_eq!(Color::from_u32(0xB400FF).css(), "#B400FF");
        assert_eq!(Color::from_u32(0xe85d75).css(), "#E85D75");
        assert_eq!(Color::from_u32(0x000001).css(), "#000001");
    }
}
