//! Bus access for panels mapped into the address space by the MCU's
//! external memory controller.
//!
//! The controller sees two locations: writing the lower one drives the
//! data/command line low (a command), the upper one drives it high (a
//! parameter or a pixel). Reads always come from the data location.

use core::ptr;

use display_interface::{DataFormat, DisplayError, WriteOnlyDataCommand};

use crate::Result;

/// Command register address with A18 as the data/command line on
/// NOR/SRAM bank 1. The data register follows at `+ 2`.
pub const BANK1_A18: usize = 0x6007_FFFE;

/// A bus that can also read the controller's data register
pub trait ReadData: WriteOnlyDataCommand {
    /// Read one word from the data register
    fn read_data(&mut self) -> Result<u16>;
}

/// Wait applied around every bus access, for parts whose bus timing is too
/// fast for the controller.
pub trait Settle {
    fn settle(&mut self);
}

/// No extra wait, for parts whose bus timing already fits the controller
#[derive(Clone, Copy, Debug, Default)]
pub struct NoSettle;

impl Settle for NoSettle {
    #[inline(always)]
    fn settle(&mut self) {}
}

/// Busy-wait a fixed number of spin cycles after each access
#[derive(Clone, Copy, Debug)]
pub struct SpinSettle {
    cycles: u32,
}

impl SpinSettle {
    pub const fn new(cycles: u32) -> Self {
        Self { cycles }
    }
}

impl Default for SpinSettle {
    fn default() -> Self {
        Self::new(3)
    }
}

impl Settle for SpinSettle {
    #[inline]
    fn settle(&mut self) {
        for _ in 0..self.cycles {
            core::hint::spin_loop();
        }
    }
}

#[derive(Clone, Copy)]
enum Register {
    Command,
    Data,
}

/// 16-bit memory-mapped parallel interface
pub struct Fsmc<S = NoSettle> {
    command: *mut u16,
    data: *mut u16,
    settle: S,
}

impl<S> Fsmc<S>
where
    S: Settle,
{
    /// Create the interface from the address of the command register.
    ///
    /// # Safety
    ///
    /// `base` and `base + 2` must be valid for volatile 16-bit reads and
    /// writes for the whole lifetime of the interface, and nothing else may
    /// access them meanwhile. On hardware this means the memory controller
    /// is configured and the bank is owned by this driver.
    pub unsafe fn new(base: usize, settle: S) -> Self {
        let command = base as *mut u16;
        Self {
            command,
            data: command.add(1),
            settle,
        }
    }

    /// Consume the interface and return the settle strategy
    pub fn release(self) -> S {
        self.settle
    }

    fn write(&mut self, register: Register, value: u16) {
        let target = match register {
            Register::Command => self.command,
            Register::Data => self.data,
        };
        // Safety: the address was handed over in `new`
        unsafe { ptr::write_volatile(target, value) };
        self.settle.settle();
    }

    fn write_iter(&mut self, register: Register, iter: impl Iterator<Item = u16>) -> Result {
        for value in iter {
            self.write(register, value);
        }

        Ok(())
    }

    fn write_format(&mut self, register: Register, data: DataFormat<'_>) -> Result {
        match data {
            DataFormat::U8(slice) => {
                self.write_iter(register, slice.iter().copied().map(u16::from))
            }
            DataFormat::U8Iter(iter) => self.write_iter(register, iter.map(u16::from)),
            DataFormat::U16(slice) => self.write_iter(register, slice.iter().copied()),
            DataFormat::U16BE(slice) => self.write_iter(register, slice.iter().copied()),
            DataFormat::U16LE(slice) => self.write_iter(register, slice.iter().copied()),
            DataFormat::U16BEIter(iter) => self.write_iter(register, iter),
            DataFormat::U16LEIter(iter) => self.write_iter(register, iter),
            _ => Err(DisplayError::DataFormatNotImplemented),
        }
    }
}

impl<S> WriteOnlyDataCommand for Fsmc<S>
where
    S: Settle,
{
    fn send_commands(&mut self, cmds: DataFormat<'_>) -> Result {
        self.write_format(Register::Command, cmds)
    }

    fn send_data(&mut self, buf: DataFormat<'_>) -> Result {
        self.write_format(Register::Data, buf)
    }
}

impl<S> ReadData for Fsmc<S>
where
    S: Settle,
{
    fn read_data(&mut self) -> Result<u16> {
        self.settle.settle();
        // Safety: the address was handed over in `new`
        Ok(unsafe { ptr::read_volatile(self.data) })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::iter::once;
    use display_interface::DataFormat::{U16BEIter, U16, U8, U8Iter};

    struct CountingSettle(usize);

    impl Settle for CountingSettle {
        fn settle(&mut self) {
            self.0 += 1;
        }
    }

    #[test]
    fn commands_and_data_hit_their_own_register() {
        let mut registers = [0u16; 2];
        let mut bus = unsafe { Fsmc::new(registers.as_mut_ptr() as usize, NoSettle) };

        bus.send_commands(U8Iter(&mut once(0x2a))).unwrap();
        bus.send_data(U16(&[0x1234])).unwrap();
        drop(bus);

        assert_eq!(registers, [0x002a, 0x1234]);
    }

    #[test]
    fn reads_come_from_the_data_register() {
        let mut registers = [0u16, 0x9341];
        let mut bus = unsafe { Fsmc::new(registers.as_mut_ptr() as usize, NoSettle) };

        assert_eq!(bus.read_data().unwrap(), 0x9341);
    }

    #[test]
    fn last_word_of_a_stream_stays_on_the_bus() {
        let mut registers = [0u16; 2];
        let mut bus = unsafe { Fsmc::new(registers.as_mut_ptr() as usize, NoSettle) };

        bus.send_data(U8(&[0x00, 0xc1, 0x30])).unwrap();
        bus.send_data(U16BEIter(&mut [0xf800u16, 0x07e0].into_iter()))
            .unwrap();
        drop(bus);

        assert_eq!(registers[1], 0x07e0);
    }

    #[test]
    fn settles_after_every_access() {
        let mut registers = [0u16; 2];
        let mut bus = unsafe { Fsmc::new(registers.as_mut_ptr() as usize, CountingSettle(0)) };

        bus.send_commands(U8(&[0x2c])).unwrap();
        bus.send_data(U16(&[1, 2, 3])).unwrap();
        bus.read_data().unwrap();

        assert_eq!(bus.release().0, 5);
    }
}
