use std::io::{self, BufRead, Write};
use std::str::FromStr;

use log::{debug, warn};

use crate::cards::card::Card;
use crate::detail_view::render_card_detail;
use crate::gallery::filter_sort::SortMode;
use crate::gallery::navigator::SwipeOutcome;
use crate::gallery::state::GalleryState;

pub const HELP: &str = "\
Commands:
  search <text>   show cards whose name contains <text>
  clear           clear the search
  sort alpha|rank toggle a sort mode
  list            list the cards in the gallery
  open <n>        open card number <n> from the list
  next | prev     move to the next/previous card
  swipe <dx>      horizontal drag, negative is left
  show            show the open card again
  close           close the card
  help            show this text
  quit            exit
";

#[derive(Debug, PartialEq, Clone)]
pub enum Command {
    Search(String),
    Clear,
    Sort(SortMode),
    List,
    Open(usize),
    Next,
    Previous,
    Swipe(f64),
    Show,
    Close,
    Help,
    Quit,
}

impl FromStr for Command {
    type Err = String;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (keyword, argument) = match line.split_once(char::is_whitespace) {
            Some((keyword, argument)) => (keyword, argument.trim()),
            None => (line, ""),
        };

        match keyword.to_lowercase().as_str() {
            "search" => Ok(Command::Search(argument.to_string())),
            "clear" => Ok(Command::Clear),
            "sort" => match argument.parse::<SortMode>()? {
                SortMode::None => Err("sort needs 'alpha' or 'rank'".to_string()),
                mode => Ok(Command::Sort(mode)),
            },
            "list" | "ls" => Ok(Command::List),
            "open" => argument
                .parse()
                .map(Command::Open)
                .map_err(|_| format!("'{}' is not a card number", argument)),
            "next" | "n" => Ok(Command::Next),
            "prev" | "p" => Ok(Command::Previous),
            "swipe" => argument
                .parse()
                .map(Command::Swipe)
                .map_err(|_| format!("'{}' is not a drag distance", argument)),
            "show" => Ok(Command::Show),
            "close" => Ok(Command::Close),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" | "q" => Ok(Command::Quit),
            "" => Err("empty command".to_string()),
            other => Err(format!("unknown command '{}'", other)),
        }
    }
}

/// Drives a `GalleryState` from text commands, one per line.
pub struct Session {
    state: GalleryState,
}

impl Session {
    pub fn new(state: GalleryState) -> Self {
        Session { state }
    }

    pub fn state(&self) -> &GalleryState {
        &self.state
    }

    /// Runs a command and returns what should be printed.
    pub fn execute(&mut self, command: Command) -> String {
        debug!("Executing {:?}", command);
        match command {
            Command::Search(text) => self.search(&text),
            Command::Clear => self.search(""),
            Command::Sort(mode) => match self.state.select_sort(mode) {
                Ok(active) => format!("Sorting: {}\n{}", active, self.list()),
                Err(e) => {
                    warn!("{}", e);
                    format!("{}\n", e)
                }
            },
            Command::List => self.list(),
            Command::Open(index) => match self.state.open_detail(index) {
                Ok(card) => render_card_detail(card),
                Err(e) => format!("{}\n", e),
            },
            Command::Next => {
                self.state.advance();
                self.show()
            }
            Command::Previous => {
                self.state.retreat();
                self.show()
            }
            Command::Swipe(translation_x) => match self.state.swipe(translation_x) {
                SwipeOutcome::Unchanged if !self.state.navigator().is_visible() => {
                    "No card is open\n".to_string()
                }
                _ => self.show(),
            },
            Command::Show => self.show(),
            Command::Close => {
                self.state.close_detail();
                self.list()
            }
            Command::Help => HELP.to_string(),
            Command::Quit => String::new(),
        }
    }

    fn show(&self) -> String {
        match self.state.current_card() {
            Some(card) => {
                let navigator = self.state.navigator();
                format!(
                    "[{}/{}] {}",
                    navigator.current_index() + 1,
                    navigator.len(),
                    render_card_detail(card)
                )
            }
            None => "No card is open\n".to_string(),
        }
    }

    fn search(&mut self, text: &str) -> String {
        let previous = self.state.sort_mode();
        let active = self.state.set_search_text(text);
        if active == previous {
            self.list()
        } else {
            format!("Sorting: {}\n{}", active, self.list())
        }
    }

    fn list(&self) -> String {
        match self.state.derived_cards() {
            Ok(cards) if cards.is_empty() => "No cards\n".to_string(),
            Ok(cards) => cards
                .iter()
                .enumerate()
                .map(|(index, card)| list_line(index, card))
                .collect(),
            Err(e) => format!("{}\n", e),
        }
    }

    pub fn run<R: BufRead, W: Write>(&mut self, reader: R, mut writer: W) -> io::Result<()> {
        writer.write_all(HELP.as_bytes())?;
        for line in reader.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            match line.parse::<Command>() {
                Ok(Command::Quit) => break,
                Ok(command) => writer.write_all(self.execute(command).as_bytes())?,
                Err(e) => writeln!(writer, "{}", e)?,
            }
            writer.flush()?;
        }
        Ok(())
    }
}

fn list_line(index: usize, card: &Card) -> String {
    let rank = card
        .rank
        .map(|rank| format!(" (rank {})", rank))
        .unwrap_or_default();
    let foil = if card.is_foil() { " F" } else { "" };
    format!("{:>3}. {}{}{}\n", index, card.name, rank, foil)
}
