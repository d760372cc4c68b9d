//! # Session Controller
//!
//! A menu-driven loop over a [`Closet`], modeled as a small state machine:
//!
//! ```text
//!            ┌──────── 99 / done ────────┐
//!            ▼                            │
//!   MAIN ──1──► CREATE ─────────────────►─┤
//!     │ ──3──► SEARCH ──────────────────►─┤
//!     │ ──4──► SORT ────────────────────►─┤
//!     │ ──5──► UPDATE ──────────────────►─┤
//!     │ ──6──► DELETE ──────────────────►─┘
//!     └─99──► EXIT
//! ```
//!
//! Every state shows its own [`Menu`] and reads one integer selection. A line that
//! is not an integer is reported and the same menu is shown again; an integer that
//! is not on the menu is a "wrong choice" and likewise re-shows the menu.
//!
//! Field-level failures are recovered where they happen: the create form is
//! re-entered until a valid garment comes out, the update menu is re-entered after
//! a rejected value. A line that is not UTF-8 is just another malformed token.
//! Nothing escapes to the caller except I/O errors on the input itself. End of
//! input stops the session as [`SessionOutcome::Interrupted`].

pub mod menu;
pub mod view;

use crate::api::Closet;
use crate::commands::{CmdMessage, GarmentUpdate, SortKey};
use crate::error::{ClosetError, Result};
use crate::model::{
    parse_flag, AmericanSize, Category, Garment, GarmentForm, GarmentKind, GarmentTemplate,
    HatStyle, SkirtLength, SleeveLength,
};
use menu::{field_prompt, Menu, BACK};
use std::io::BufRead;
use uuid::Uuid;
use view::View;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuState {
    Main,
    Create,
    Search,
    Sort,
    Update,
    Delete,
    Exit,
}

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOutcome {
    /// The user chose Exit from the main menu.
    Completed,
    /// Input ran out before the user exited.
    Interrupted,
}

/// Why a step stopped early.
enum Stop {
    Eof,
    Failed(ClosetError),
}

impl From<ClosetError> for Stop {
    fn from(err: ClosetError) -> Self {
        Stop::Failed(err)
    }
}

type Step<T> = std::result::Result<T, Stop>;

const ALL_CLOTHES: &str = "All clothes:";

pub struct Session<'a, R: BufRead, V: View> {
    closet: &'a mut Closet,
    input: R,
    view: &'a mut V,
}

impl<'a, R: BufRead, V: View> Session<'a, R, V> {
    pub fn new(closet: &'a mut Closet, input: R, view: &'a mut V) -> Self {
        Self {
            closet,
            input,
            view,
        }
    }

    pub fn run(&mut self) -> Result<SessionOutcome> {
        let mut state = MenuState::Main;
        loop {
            let next = match state {
                MenuState::Main => self.main_menu(),
                MenuState::Create => self.create(),
                MenuState::Search => self.search(),
                MenuState::Sort => self.sort(),
                MenuState::Update => self.update(),
                MenuState::Delete => self.delete(),
                MenuState::Exit => return Ok(SessionOutcome::Completed),
            };
            match next {
                Ok(next) => {
                    tracing::debug!(from = ?state, to = ?next, "menu transition");
                    state = next;
                }
                Err(Stop::Eof) => {
                    tracing::debug!(?state, "input closed");
                    return Ok(SessionOutcome::Interrupted);
                }
                Err(Stop::Failed(err)) => return Err(err),
            }
        }
    }

    fn main_menu(&mut self) -> Step<MenuState> {
        let next = match self.read_choice(&Menu::main())? {
            1 => MenuState::Create,
            2 => {
                self.view.show_garments(ALL_CLOTHES, self.closet.garments());
                MenuState::Main
            }
            3 => MenuState::Search,
            4 => MenuState::Sort,
            5 => MenuState::Update,
            6 => MenuState::Delete,
            _ => MenuState::Exit,
        };
        Ok(next)
    }

    fn create(&mut self) -> Step<MenuState> {
        let template = match self.read_choice(&Menu::create())? {
            1 => GarmentTemplate::Pants,
            2 => GarmentTemplate::Shirt,
            3 => GarmentTemplate::Hat,
            4 => GarmentTemplate::Skirt,
            5 => GarmentTemplate::Generic,
            _ => return Ok(MenuState::Main),
        };

        loop {
            let mut form = GarmentForm::new(template);
            for field in template.fields() {
                self.view.prompt(&field_prompt(field));
                let value = self.read_line()?;
                form.set(field, value);
            }
            match self.closet.create(&form) {
                Ok(garment) => {
                    self.view
                        .message(CmdMessage::success(format!("Clothes created: {}", garment)));
                    return Ok(MenuState::Main);
                }
                Err(err) => {
                    self.report(&err);
                    self.view.message(CmdMessage::info("Try again"));
                }
            }
        }
    }

    fn search(&mut self) -> Step<MenuState> {
        let results = match self.read_choice(&Menu::search())? {
            1 => {
                self.view
                    .prompt(&format!("Enter clothes type {}:", Category::choices()));
                let line = self.read_line()?;
                line.parse::<Category>()
                    .map(|category| self.closet.find_by_category(category))
            }
            2 => {
                self.view.prompt("Enter color of clothes:");
                let line = self.read_line()?;
                Ok(self.closet.find_by_color(&line))
            }
            3 => {
                self.view.prompt(&format!(
                    "Enter clothes american size {}:",
                    AmericanSize::choices()
                ));
                let line = self.read_line()?;
                line.parse::<AmericanSize>()
                    .map(|size| self.closet.find_by_american_size(size))
            }
            4 => {
                self.view.prompt("Enter min european size (exclusive):");
                match self.read_int()? {
                    Ok(min) => {
                        self.view.prompt("Enter max european size (inclusive):");
                        self.read_int()?
                            .and_then(|max| self.closet.find_by_european_size_range(min, max))
                    }
                    Err(err) => Err(err),
                }
            }
            5 => {
                self.view.show_identifiers(&self.closet.identifiers());
                self.view.prompt("Enter uuid for search:");
                let line = self.read_line()?;
                parse_id(&line).map(|id| self.closet.find_by_id(id).into_iter().collect())
            }
            _ => return Ok(MenuState::Main),
        };

        match results {
            Ok(found) => {
                if found.is_empty() {
                    self.view.message(CmdMessage::warning("Nothing found"));
                } else {
                    self.view.show_garments("Results of your search:", &found);
                }
                Ok(MenuState::Main)
            }
            Err(err) => {
                self.report(&err);
                Ok(MenuState::Search)
            }
        }
    }

    fn sort(&mut self) -> Step<MenuState> {
        let key = match self.read_choice(&Menu::sort())? {
            1 => SortKey::Category,
            2 => SortKey::Color,
            3 => SortKey::AmericanSize,
            4 => SortKey::EuropeanSize,
            5 => SortKey::Default,
            _ => return Ok(MenuState::Main),
        };
        let sorted = self.closet.sorted_by_key(key);
        self.view.show_garments("Sorted clothes:", &sorted);
        Ok(MenuState::Main)
    }

    fn update(&mut self) -> Step<MenuState> {
        self.view.show_garments(ALL_CLOTHES, self.closet.garments());
        let Some(garment) = self.read_target("Enter uuid of clothes which you want to update:")?
        else {
            self.view.message(CmdMessage::warning("Clothes was NOT updated"));
            return Ok(MenuState::Main);
        };

        let menu = Menu::update(garment.kind());
        loop {
            let choice = self.read_choice(&menu)?;
            if choice == BACK {
                self.view.message(CmdMessage::warning("Clothes was NOT updated"));
                return Ok(MenuState::Main);
            }

            let change = match self.read_update(choice, &garment)? {
                Ok(change) => change,
                Err(err) => {
                    self.report(&err);
                    continue;
                }
            };

            match self.closet.update(garment.id(), &change) {
                Ok(true) => {
                    self.view.message(CmdMessage::success("Clothes was updated"));
                    return Ok(MenuState::Main);
                }
                Ok(false) => {
                    self.view.message(CmdMessage::warning("Clothes was NOT updated"));
                    return Ok(MenuState::Main);
                }
                Err(err) => self.report(&err),
            }
        }
    }

    /// Reads the new value for update option `choice`.
    fn read_update(&mut self, choice: u32, garment: &Garment) -> Step<Result<GarmentUpdate>> {
        let change = match (choice, garment.kind()) {
            (1, _) => {
                self.show_current("color", garment.color());
                self.view.prompt("Enter new clothes color:");
                Ok(GarmentUpdate::Color(self.read_line()?))
            }
            (2, _) => {
                self.show_current("european size", &garment.european_size().to_string());
                self.view.prompt("Enter new clothes european size:");
                self.read_int()?.map(GarmentUpdate::EuropeanSize)
            }
            (3, _) => {
                self.show_current("american size", garment.american_size().as_str());
                self.view.prompt(&format!(
                    "Enter new clothes american size {}:",
                    AmericanSize::choices()
                ));
                self.read_line()?
                    .parse::<AmericanSize>()
                    .map(GarmentUpdate::AmericanSize)
            }
            (4, _) => {
                self.show_current("type", garment.category().as_str());
                self.view
                    .prompt(&format!("Enter new clothes type {}:", Category::choices()));
                self.read_line()?
                    .parse::<Category>()
                    .map(GarmentUpdate::Category)
            }
            (5, GarmentKind::Hat { .. }) => {
                self.view.prompt("Is the hat waterproof? (true/false):");
                parse_flag("waterproof", &self.read_line()?)
                    .map(GarmentUpdate::Waterproof)
            }
            (6, GarmentKind::Hat { .. }) => {
                self.view
                    .prompt(&format!("Enter hat style {}:", HatStyle::choices()));
                self.read_line()?
                    .parse::<HatStyle>()
                    .map(GarmentUpdate::HatStyle)
            }
            (5, GarmentKind::Pants { .. }) => {
                self.view.prompt("Do the pants have pockets? (true/false):");
                parse_flag("pockets", &self.read_line()?)
                    .map(GarmentUpdate::HasPockets)
            }
            (5, GarmentKind::Shirt { .. }) => {
                self.view
                    .prompt(&format!("Enter sleeve length {}:", SleeveLength::choices()));
                self.read_line()?
                    .parse::<SleeveLength>()
                    .map(GarmentUpdate::SleeveLength)
            }
            (5, GarmentKind::Skirt { .. }) => {
                self.view
                    .prompt(&format!("Enter skirt length {}:", SkirtLength::choices()));
                self.read_line()?
                    .parse::<SkirtLength>()
                    .map(GarmentUpdate::SkirtLength)
            }
            (other, _) => Err(ClosetError::MalformedInput(format!(
                "option {} is not available",
                other
            ))),
        };
        Ok(change)
    }

    fn delete(&mut self) -> Step<MenuState> {
        self.view.show_garments(ALL_CLOTHES, self.closet.garments());
        let Some(garment) = self.read_target("Enter uuid of clothes which you want to delete:")?
        else {
            self.view.message(CmdMessage::warning("Clothes was NOT deleted"));
            return Ok(MenuState::Main);
        };

        self.view.show_garment(&garment);
        if self.read_choice(&Menu::delete_confirm())? == 1 {
            if self.closet.delete_by_id(Some(garment.id())) {
                self.view.message(CmdMessage::success("Clothes was deleted"));
            } else {
                self.view.message(CmdMessage::warning("Clothes was NOT deleted"));
            }
        } else {
            self.view.message(CmdMessage::info("Deletion cancelled"));
        }
        Ok(MenuState::Main)
    }

    /// Reads an identifier and looks it up, reporting bad or unknown ids.
    fn read_target(&mut self, prompt: &str) -> Step<Option<Garment>> {
        self.view.prompt(prompt);
        let line = self.read_line()?;
        let id = match parse_id(&line) {
            Ok(id) => id,
            Err(err) => {
                self.report(&err);
                return Ok(None);
            }
        };
        let found = self.closet.find_by_id(id);
        if found.is_none() {
            self.report(&ClosetError::GarmentNotFound(id));
        }
        Ok(found)
    }

    /// Shows `menu` until a selection on it is read.
    fn read_choice(&mut self, menu: &Menu) -> Step<u32> {
        loop {
            self.view.show_menu(menu);
            let line = self.read_line()?;
            match line.parse::<u32>() {
                Ok(choice) if menu.has(choice) => return Ok(choice),
                Ok(_) => self.view.message(CmdMessage::error("Wrong choice")),
                Err(_) => self.report(&ClosetError::MalformedInput(line)),
            }
        }
    }

    /// Reads one integer; a non-integer line is a `MalformedInput` value, not a stop.
    fn read_int(&mut self) -> Step<Result<i32>> {
        let line = self.read_line()?;
        Ok(line
            .parse::<i32>()
            .map_err(|_| ClosetError::MalformedInput(line)))
    }

    /// Reads one line. Bytes that are not UTF-8 are replaced, so a garbled line
    /// fails parsing like any other bad token.
    fn read_line(&mut self) -> Step<String> {
        let mut buf = Vec::new();
        let read = self
            .input
            .read_until(b'\n', &mut buf)
            .map_err(ClosetError::Io)?;
        if read == 0 {
            return Err(Stop::Eof);
        }
        Ok(String::from_utf8_lossy(&buf).trim().to_string())
    }

    fn show_current(&mut self, field: &str, value: &str) {
        self.view
            .message(CmdMessage::info(format!("Clothes {} is: {}", field, value)));
    }

    fn report(&mut self, err: &ClosetError) {
        tracing::debug!(error = %err, "recovered input error");
        self.view.message(CmdMessage::error(err.to_string()));
    }
}

fn parse_id(text: &str) -> Result<Uuid> {
    Uuid::parse_str(text.trim()).map_err(|_| ClosetError::InvalidIdentifier(text.to_string()))
}
