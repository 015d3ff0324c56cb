#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use display_interface::{DataFormat, DisplayError, WriteOnlyDataCommand};
use embedded_hal::blocking::delay::DelayMs;
use ili9341_fsmc::{Config, DisplaySize240x320, Ili9341, ReadData};

/// Side of the square pixel store, large enough for both orientations
pub const GRAM_SIDE: usize = 320;

const COLUMN_ADDRESS_SET: u8 = 0x2a;
const PAGE_ADDRESS_SET: u8 = 0x2b;
const MEMORY_WRITE: u8 = 0x2c;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Access {
    Command(u8),
    Data(u16),
    Read,
}

/// What the simulated controller has seen and holds
pub struct PanelState {
    pub log: Vec<Access>,
    pub reads: VecDeque<u16>,
    pub gram: Vec<u16>,
    /// Every pixel written to GRAM, in order
    pub writes: Vec<(u16, u16, u16)>,
    columns: (u16, u16),
    pages: (u16, u16),
    command: Option<u8>,
    params: Vec<u16>,
    pointer: (u16, u16),
}

impl PanelState {
    fn new() -> Self {
        Self {
            log: Vec::new(),
            reads: VecDeque::new(),
            gram: vec![0; GRAM_SIDE * GRAM_SIDE],
            writes: Vec::new(),
            columns: (0, 0),
            pages: (0, 0),
            command: None,
            params: Vec::new(),
            pointer: (0, 0),
        }
    }

    fn command(&mut self, cmd: u8) {
        self.log.push(Access::Command(cmd));
        self.command = Some(cmd);
        self.params.clear();
        if cmd == MEMORY_WRITE {
            self.pointer = (self.columns.0, self.pages.0);
        }
    }

    fn data(&mut self, value: u16) {
        self.log.push(Access::Data(value));
        match self.command {
            Some(COLUMN_ADDRESS_SET) => Self::address(&mut self.params, &mut self.columns, value),
            Some(PAGE_ADDRESS_SET) => Self::address(&mut self.params, &mut self.pages, value),
            Some(MEMORY_WRITE) => self.pixel_write(value),
            _ => self.params.push(value),
        }
    }

    fn address(params: &mut Vec<u16>, range: &mut (u16, u16), value: u16) {
        params.push(value & 0xff);
        match params.as_slice() {
            [hi, lo] => range.0 = *hi << 8 | *lo,
            [_, _, hi, lo] => range.1 = *hi << 8 | *lo,
            _ => {}
        }
    }

    /// The controller drops pixels while the pointer sits outside the
    /// window, as it does when the start of a range passes its end
    fn pixel_write(&mut self, color: u16) {
        let (x, y) = self.pointer;
        if x < self.columns.0 || x > self.columns.1 || y < self.pages.0 || y > self.pages.1 {
            return;
        }
        if usize::from(x) < GRAM_SIDE && usize::from(y) < GRAM_SIDE {
            self.gram[usize::from(y) * GRAM_SIDE + usize::from(x)] = color;
        }
        self.writes.push((x, y, color));

        self.pointer.0 += 1;
        if self.pointer.0 > self.columns.1 {
            self.pointer.0 = self.columns.0;
            self.pointer.1 += 1;
            if self.pointer.1 > self.pages.1 {
                self.pointer.1 = self.pages.0;
            }
        }
    }

    fn read(&mut self) -> u16 {
        self.log.push(Access::Read);
        self.reads.pop_front().unwrap_or(0)
    }

    /// Forget everything seen so far, keeping the GRAM content
    pub fn reset_log(&mut self) {
        self.log.clear();
        self.writes.clear();
    }

    pub fn pixel(&self, x: usize, y: usize) -> u16 {
        self.gram[y * GRAM_SIDE + x]
    }

    /// Current (start column, end column, start page, end page)
    pub fn window(&self) -> (u16, u16, u16, u16) {
        (self.columns.0, self.columns.1, self.pages.0, self.pages.1)
    }

    pub fn commands(&self) -> Vec<u8> {
        self.log
            .iter()
            .filter_map(|access| match access {
                Access::Command(cmd) => Some(*cmd),
                _ => None,
            })
            .collect()
    }

    /// Data words written right after the last occurrence of `cmd`
    pub fn last_params(&self, cmd: u8) -> Vec<u16> {
        let start = self
            .log
            .iter()
            .rposition(|access| *access == Access::Command(cmd))
            .expect("command never sent");
        self.log[start + 1..]
            .iter()
            .take_while(|access| matches!(access, Access::Data(_)))
            .map(|access| match access {
                Access::Data(value) => *value,
                _ => unreachable!(),
            })
            .collect()
    }

    pub fn written_points(&self) -> Vec<(u16, u16)> {
        self.writes.iter().map(|&(x, y, _)| (x, y)).collect()
    }
}

/// Host stand-in for an ILI9341 behind the memory controller
#[derive(Clone)]
pub struct SimulatedPanel {
    pub state: Rc<RefCell<PanelState>>,
}

impl SimulatedPanel {
    /// A panel that answers the given reads, in order, then zeros
    pub fn new(reads: &[u16]) -> Self {
        let mut state = PanelState::new();
        state.reads.extend(reads.iter().copied());
        Self {
            state: Rc::new(RefCell::new(state)),
        }
    }

    /// A panel that only answers to Read ID4
    pub fn ili9341() -> Self {
        Self::new(&[0x0000, 0x00, 0x00, 0x93, 0x41])
    }

    fn words(&mut self, data: DataFormat<'_>, command: bool) -> Result<(), DisplayError> {
        let mut state = self.state.borrow_mut();
        let mut push = |value: u16| {
            if command {
                state.command(value as u8)
            } else {
                state.data(value)
            }
        };
        match data {
            DataFormat::U8(slice) => slice.iter().for_each(|&b| push(u16::from(b))),
            DataFormat::U8Iter(iter) => iter.for_each(|b| push(u16::from(b))),
            DataFormat::U16(slice) => slice.iter().for_each(|&w| push(w)),
            DataFormat::U16BE(slice) => slice.iter().for_each(|&w| push(w)),
            DataFormat::U16LE(slice) => slice.iter().for_each(|&w| push(w)),
            DataFormat::U16BEIter(iter) => iter.for_each(push),
            DataFormat::U16LEIter(iter) => iter.for_each(push),
            _ => return Err(DisplayError::DataFormatNotImplemented),
        }
        Ok(())
    }
}

impl WriteOnlyDataCommand for SimulatedPanel {
    fn send_commands(&mut self, cmd: DataFormat<'_>) -> Result<(), DisplayError> {
        self.words(cmd, true)
    }

    fn send_data(&mut self, buf: DataFormat<'_>) -> Result<(), DisplayError> {
        self.words(buf, false)
    }
}

impl ReadData for SimulatedPanel {
    fn read_data(&mut self) -> Result<u16, DisplayError> {
        Ok(self.state.borrow_mut().read())
    }
}

/// Remembers every delay it was asked for
#[derive(Default)]
pub struct RecordingDelay(pub Vec<u16>);

impl DelayMs<u16> for RecordingDelay {
    fn delay_ms(&mut self, ms: u16) {
        self.0.push(ms);
    }
}

/// An initialized display and a handle on the panel behind it, with the
/// initialization traffic already forgotten
pub fn ready_display(config: Config) -> (Ili9341<SimulatedPanel>, Rc<RefCell<PanelState>>) {
    let panel = SimulatedPanel::ili9341();
    let state = panel.state.clone();
    let display = Ili9341::new(panel, &mut RecordingDelay::default(), DisplaySize240x320, config)
        .expect("simulated ILI9341 must initialize");
    state.borrow_mut().reset_log();
    (display, state)
}

pub fn portrait_display() -> (Ili9341<SimulatedPanel>, Rc<RefCell<PanelState>>) {
    ready_display(Config::default().with_orientation(ili9341_fsmc::Orientation::Portrait))
}
