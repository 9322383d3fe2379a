// Line-oriented console output shared by the demo drivers.

use crate::config::DemoConfig;
use colored::Colorize;
use std::fmt::Display;
use std::io::{self, Write};

/// Writes demo output to any sink; stdout in the binaries, a buffer in tests.
pub struct Console<W: Write> {
    out: W,
    color: bool,
}

impl<W: Write> Console<W> {
    pub fn new(out: W) -> Self {
        Self { out, color: false }
    }

    pub fn with_config(out: W, config: &DemoConfig) -> Self {
        Self {
            out,
            color: config.color,
        }
    }

    pub fn line(&mut self, text: impl Display) -> io::Result<()> {
        writeln!(self.out, "{}", text)
    }

    pub fn error(&mut self, err: impl Display) -> io::Result<()> {
        if self.color {
            writeln!(self.out, "{}", err.to_string().red())
        } else {
            writeln!(self.out, "{}", err)
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

/// Lets trait objects (`BaseCar`, `HttpAdapter`) print through the console.
impl<W: Write> Write for Console<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.out.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}

impl Console<io::Stdout> {
    pub fn stdout(config: &DemoConfig) -> Self {
        Self::with_config(io::stdout(), config)
    }
}
