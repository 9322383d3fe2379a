// Factory Method with a parameterised creator: one factory, many adapters,
// each bound to the framework name it was made with. Nothing is sent over
// the network; every verb only reports what it would use.

use crate::console::Console;
use std::fmt;
use std::io::{self, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl HttpMethod {
    pub const ALL: [HttpMethod; 5] = [
        HttpMethod::Get,
        HttpMethod::Post,
        HttpMethod::Put,
        HttpMethod::Patch,
        HttpMethod::Delete,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub trait HttpAdapter {
    fn framework(&self) -> &str;

    fn describe(&self, method: HttpMethod) -> String {
        format!("{} using {}", method, self.framework())
    }

    fn send(&self, method: HttpMethod, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "{}", self.describe(method))
    }

    fn get(&self, out: &mut dyn Write) -> io::Result<()> {
        self.send(HttpMethod::Get, out)
    }

    fn post(&self, out: &mut dyn Write) -> io::Result<()> {
        self.send(HttpMethod::Post, out)
    }

    fn put(&self, out: &mut dyn Write) -> io::Result<()> {
        self.send(HttpMethod::Put, out)
    }

    fn patch(&self, out: &mut dyn Write) -> io::Result<()> {
        self.send(HttpMethod::Patch, out)
    }

    fn delete(&self, out: &mut dyn Write) -> io::Result<()> {
        self.send(HttpMethod::Delete, out)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestHttpAdapter {
    framework: String,
}

impl RestHttpAdapter {
    pub fn new(framework: impl Into<String>) -> Self {
        Self {
            framework: framework.into(),
        }
    }
}

impl HttpAdapter for RestHttpAdapter {
    fn framework(&self) -> &str {
        &self.framework
    }
}

pub trait HttpAdapterFactory {
    fn make_adapter(&self, framework: &str) -> Box<dyn HttpAdapter>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct RestHttpAdapterFactory;

impl HttpAdapterFactory for RestHttpAdapterFactory {
    fn make_adapter(&self, framework: &str) -> Box<dyn HttpAdapter> {
        Box::new(RestHttpAdapter::new(framework))
    }
}

/// Calls every verb once: GET, POST, PUT, PATCH, DELETE.
pub fn exercise_adapter<W: Write>(adapter: &dyn HttpAdapter, console: &mut Console<W>) -> io::Result<()> {
    adapter.get(console)?;
    adapter.post(console)?;
    adapter.put(console)?;
    adapter.patch(console)?;
    adapter.delete(console)
}

pub fn run_demo<W: Write>(console: &mut Console<W>) -> io::Result<()> {
    let factory: Box<dyn HttpAdapterFactory> = Box::new(RestHttpAdapterFactory);

    for framework in ["Express", "Fastify"] {
        let adapter = factory.make_adapter(framework);
        exercise_adapter(&*adapter, console)?;
    }
    Ok(())
}
