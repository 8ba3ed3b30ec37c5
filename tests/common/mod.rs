//! Common test utilities for logicalc integration tests

pub use logicalc::{evaluate, Action, Display, ErrorKind, Session, State};

/// Display that records every frame it is asked to render
#[derive(Default)]
pub struct Screen {
    pub frames: Vec<String>,
}

impl Display for Screen {
    fn render(&mut self, text: &str) {
        self.frames.push(text.to_string());
    }
}

impl Screen {
    #[allow(dead_code)]
    pub fn last(&self) -> &str {
        self.frames.last().map(String::as_str).unwrap_or("")
    }
}

/// Helper to run a line of actions on a fresh session
pub fn run(line: &str) -> Session<Screen> {
    let mut session = Session::new(Screen::default());
    feed(&mut session, line);
    session
}

/// Helper to run a line of actions on an existing session
pub fn feed(session: &mut Session<Screen>, line: &str) {
    for action in Action::parse_line(line).unwrap() {
        session.dispatch(action);
    }
}
