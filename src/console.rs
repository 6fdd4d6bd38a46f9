use std::cell::RefCell;
use std::rc::Rc;

// =============================================================================
// Console capability: "can write one line of output"
// =============================================================================

// Every observable side effect in the shop goes through a Console,
// so a test can swap the terminal for a Transcript and read back
// exactly what happened, in order.
pub trait Console {
    fn line(&mut self, message: &str);
}

pub type SharedConsole = Rc<RefCell<dyn Console>>;

/// Configuration capability: this bundle can hand out the shared console.
pub trait HasConsole {
    fn console(&self) -> SharedConsole;
}

pub struct Terminal;

impl Console for Terminal {
    fn line(&mut self, message: &str) {
        println!("{message}");
    }
}

pub fn terminal() -> SharedConsole {
    Rc::new(RefCell::new(Terminal))
}

/// In-memory console that keeps every line it was given.
#[derive(Default)]
pub struct Transcript {
    lines: Vec<String>,
}

impl Transcript {
    pub fn new() -> Rc<RefCell<Transcript>> {
        Rc::new(RefCell::new(Transcript::default()))
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

impl Console for Transcript {
    fn line(&mut self, message: &str) {
        self.lines.push(message.to_string());
    }
}
