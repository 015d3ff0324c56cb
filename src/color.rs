//! Common rgb565 colors

pub const WHITE: u16 = 0xFFFF;
pub const BLACK: u16 = 0x0000;
pub const BLUE: u16 = 0x001F;
pub const BRED: u16 = 0xF81F;
pub const GRED: u16 = 0xFFE0;
pub const GBLUE: u16 = 0x07FF;
pub const RED: u16 = 0xF800;
pub const MAGENTA: u16 = 0xF81F;
pub const GREEN: u16 = 0x07E0;
pub const CYAN: u16 = 0x7FFF;
pub const YELLOW: u16 = 0xFFE0;
pub const BROWN: u16 = 0xBC40;
/// Reddish brown
pub const BRRED: u16 = 0xFC07;
pub const GRAY: u16 = 0x8430;
