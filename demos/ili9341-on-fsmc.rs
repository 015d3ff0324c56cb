#![no_std]
#![no_main]

use cortex_m_rt::entry;
use panic_semihosting as _;

use embedded_graphics::{
    mono_font::{ascii::FONT_9X18_BOLD, MonoTextStyle},
    pixelcolor::Rgb565,
    prelude::*,
    primitives::{PrimitiveStyleBuilder, Rectangle, Triangle},
    text::Text,
};
use embedded_hal::blocking::delay::DelayMs;
use ili9341_fsmc::{
    color, Config, DisplaySize240x320, DrawMode, Fsmc, Ili9341, SpinSettle, BANK1_A18,
    XNUM_ZERO_PAD,
};
use stm32f4xx_hal::{pac, prelude::*};

// Configure one GPIO pin to AF12 (FSMC): alternate mode, high speed, push-pull, no pull
macro_rules! cfg_pin_af12 {
    ($gpio:expr, $pin:expr) => {{
        let pin: u32 = $pin;
        $gpio.moder.modify(|r, w| unsafe {
            w.bits((r.bits() & !(0b11 << (pin * 2))) | (0b10 << (pin * 2)))
        });
        $gpio.ospeedr.modify(|r, w| unsafe {
            w.bits((r.bits() & !(0b11 << (pin * 2))) | (0b10 << (pin * 2)))
        });
        $gpio.otyper.modify(|r, w| unsafe { w.bits(r.bits() & !(1 << pin)) });
        $gpio.pupdr.modify(|r, w| unsafe { w.bits(r.bits() & !(0b11 << (pin * 2))) });
        if pin < 8 {
            $gpio.afrl.modify(|r, w| unsafe {
                w.bits((r.bits() & !(0xf << (pin * 4))) | (12 << (pin * 4)))
            });
        } else {
            $gpio.afrh.modify(|r, w| unsafe {
                w.bits((r.bits() & !(0xf << ((pin - 8) * 4))) | (12 << ((pin - 8) * 4)))
            });
        }
    }};
}

macro_rules! cfg_pins_af12 {
    ($gpio:expr, [$($pin:expr),* $(,)?]) => {{
        $( cfg_pin_af12!($gpio, $pin); )*
    }};
}

/// NE1 on PD7, A18 as data/command on PD13, 16-bit data on PD and PE
fn fsmc_init(dp: &pac::Peripherals) {
    // GPIOD, GPIOE and FSMC clocks
    dp.RCC
        .ahb1enr
        .modify(|r, w| unsafe { w.bits(r.bits() | (1 << 3) | (1 << 4)) });
    dp.RCC.ahb3enr.modify(|r, w| unsafe { w.bits(r.bits() | 1) });
    cortex_m::asm::nop();

    cfg_pins_af12!(dp.GPIOD, [0, 1, 4, 5, 7, 8, 9, 10, 13, 14, 15]);
    cfg_pins_af12!(dp.GPIOE, [7, 8, 9, 10, 11, 12, 13, 14, 15]);

    // SRAM, 16-bit, write enabled, bank 1 on
    dp.FSMC.bcr1.write(|w| unsafe { w.bits(0x0000_1091) });
    // ADDSET 2, DATAST 15 HCLK cycles, slow enough for ID reads
    dp.FSMC.btr1.write(|w| unsafe { w.bits(0x0000_0f02) });
}

#[entry]
fn main() -> ! {
    let cp = cortex_m::Peripherals::take().unwrap();
    let dp = pac::Peripherals::take().unwrap();

    fsmc_init(&dp);

    let rcc = dp.RCC.constrain();
    let clocks = rcc.cfgr.sysclk(168.MHz()).hclk(168.MHz()).freeze();
    let mut delay = cp.SYST.delay(&clocks);

    // Safety: the bank was configured above and nothing else touches it
    let interface = unsafe { Fsmc::new(BANK1_A18, SpinSettle::default()) };

    // An unknown controller ends in the panic handler
    let mut lcd = Ili9341::new(interface, &mut delay, DisplaySize240x320, Config::default())
        .unwrap();

    lcd.clear(color::BLACK).unwrap();
    let x_max = lcd.width() as u16 - 1;
    let y_max = lcd.height() as u16 - 1;

    // Native primitives
    lcd.set_foreground(color::RED);
    lcd.draw_rectangle(0, 0, x_max, y_max).unwrap();
    lcd.set_foreground(color::YELLOW);
    lcd.draw_line(10, 10, x_max - 10, y_max - 10).unwrap();
    lcd.set_foreground(color::CYAN);
    lcd.draw_circle(x_max / 2, y_max / 2, 40).unwrap();
    lcd.fill(20, 150, 60, 190, color::MAGENTA).unwrap();

    let mut gradient = [0u16; 32 * 8];
    for (i, pixel) in gradient.iter_mut().enumerate() {
        *pixel = ((i % 32) as u16) << 11 | ((i / 32) as u16) << 2;
    }
    lcd.draw_bitmap(80, 170, 111, 177, &gradient).unwrap();

    // Text
    lcd.set_foreground(color::WHITE);
    lcd.set_background(color::BLACK);
    lcd.show_string(10, 20, 200, 48, 24, "ILI9341", DrawMode::Opaque)
        .unwrap();
    lcd.show_string(10, 50, 150, 32, 12, "Parallel bus on FSMC bank 1", DrawMode::Overlay)
        .unwrap();
    lcd.show_num(10, 90, lcd.id().into(), 5, 16).unwrap();

    // embedded-graphics on top of the same driver
    let outline = PrimitiveStyleBuilder::new()
        .stroke_color(Rgb565::GREEN)
        .stroke_width(2)
        .build();
    Triangle::new(Point::new(250, 40), Point::new(300, 40), Point::new(275, 10))
        .into_styled(outline)
        .draw(&mut lcd)
        .unwrap();
    Rectangle::new(Point::new(240, 60), Size::new(60, 30))
        .into_styled(outline)
        .draw(&mut lcd)
        .unwrap();
    Text::new("eg", Point::new(255, 80), MonoTextStyle::new(&FONT_9X18_BOLD, Rgb565::WHITE))
        .draw(&mut lcd)
        .unwrap();

    let mut counter: u32 = 0;
    loop {
        lcd.show_xnum(10, 214, counter, 5, 12, XNUM_ZERO_PAD).unwrap();
        counter = counter.wrapping_add(1) % 100_000;
        delay.delay_ms(100u16);
    }
}
