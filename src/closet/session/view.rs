use super::menu::Menu;
use crate::commands::CmdMessage;
use crate::model::{Category, Garment};
use uuid::Uuid;

/// The display boundary of a session.
///
/// The session decides *what* to show; implementations decide how. The terminal
/// client renders with colors and an aligned table, tests record the calls.
pub trait View {
    fn show_menu(&mut self, menu: &Menu);

    /// Ask for the next line of input.
    fn prompt(&mut self, text: &str);

    fn show_garments(&mut self, title: &str, garments: &[Garment]);

    fn show_garment(&mut self, garment: &Garment);

    fn show_identifiers(&mut self, ids: &[(Uuid, Category)]);

    fn message(&mut self, message: CmdMessage);
}

#[cfg(any(test, feature = "test_utils"))]
pub mod recording {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    pub enum ViewEvent {
        Menu(&'static str),
        Prompt(String),
        Garments(String, Vec<Garment>),
        Garment(Garment),
        Identifiers(usize),
        Message(CmdMessage),
    }

    /// A [`View`] that remembers everything it was asked to show.
    #[derive(Debug, Default)]
    pub struct RecordingView {
        pub events: Vec<ViewEvent>,
    }

    impl RecordingView {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn messages(&self) -> Vec<&str> {
            self.events
                .iter()
                .filter_map(|e| match e {
                    ViewEvent::Message(m) => Some(m.content.as_str()),
                    _ => None,
                })
                .collect()
        }

        pub fn menus(&self) -> Vec<&'static str> {
            self.events
                .iter()
                .filter_map(|e| match e {
                    ViewEvent::Menu(title) => Some(*title),
                    _ => None,
                })
                .collect()
        }

        /// The most recent garment listing, if any.
        pub fn last_listing(&self) -> Option<&[Garment]> {
            self.events.iter().rev().find_map(|e| match e {
                ViewEvent::Garments(_, garments) => Some(garments.as_slice()),
                _ => None,
            })
        }
    }

    impl View for RecordingView {
        fn show_menu(&mut self, menu: &Menu) {
            self.events.push(ViewEvent::Menu(menu.title));
        }

        fn prompt(&mut self, text: &str) {
            self.events.push(ViewEvent::Prompt(text.to_string()));
        }

        fn show_garments(&mut self, title: &str, garments: &[Garment]) {
            self.events
                .push(ViewEvent::Garments(title.to_string(), garments.to_vec()));
        }

        fn show_garment(&mut self, garment: &Garment) {
            self.events.push(ViewEvent::Garment(garment.clone()));
        }

        fn show_identifiers(&mut self, ids: &[(Uuid, Category)]) {
            self.events.push(ViewEvent::Identifiers(ids.len()));
        }

        fn message(&mut self, message: CmdMessage) {
            self.events.push(ViewEvent::Message(message));
        }
    }
}
