//! Interactive menu for the report session
//!
//! This module prints the report menu and reads the user's choice. Invalid
//! choices print an error and re-prompt; they never leave this module.

use colored::*;
use std::io::Write;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::debug;

use crate::app::services::report_engine::ReportKind;
use crate::constants::{MENU_EXIT_OPTION, MENU_FIRST_OPTION};
use crate::{Error, Result};

const RULE: &str = "--------------------------------------------------------";
const BANNER: &str = "*************** Students Record Analysis ***************";

/// A valid menu choice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Report(ReportKind),
    Exit,
}

/// Parse one line of user input into a menu action
pub fn parse_menu_selection(input: &str) -> Result<MenuAction> {
    let trimmed = input.trim();
    let choice: i64 = trimmed
        .parse()
        .map_err(|_| Error::menu_not_a_number(trimmed))?;

    if choice == i64::from(MENU_EXIT_OPTION) {
        return Ok(MenuAction::Exit);
    }

    u8::try_from(choice)
        .ok()
        .filter(|code| *code >= MENU_FIRST_OPTION)
        .and_then(ReportKind::from_action)
        .map(MenuAction::Report)
        .ok_or_else(|| Error::menu_out_of_range(trimmed))
}

/// Full menu text
pub fn render_menu(color: bool) -> String {
    let mut menu = String::new();

    let banner = if color {
        BANNER.bright_green().bold().to_string()
    } else {
        BANNER.to_string()
    };
    menu.push_str(&format!("{}\n{}\n{}\n", RULE, banner, RULE));

    for kind in ReportKind::ALL {
        menu.push_str(&format!("{}\n", kind));
    }
    menu.push_str(&format!("{} - Exit the program\n\n", MENU_EXIT_OPTION));
    menu.push_str(&format!(
        "Please select one of the options from above ({} - {})\n",
        MENU_FIRST_OPTION, MENU_EXIT_OPTION
    ));

    menu
}

/// Print the menu and read choices until a valid one is entered
///
/// End of input is treated as a request to exit.
pub async fn prompt_menu_action<R, W>(reader: &mut R, writer: &mut W, color: bool) -> Result<MenuAction>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let write_error = |e| Error::io("Failed to write menu", e);

    write!(writer, "{}", render_menu(color)).map_err(write_error)?;
    writer.flush().map_err(write_error)?;

    loop {
        let mut input = String::new();
        let bytes = reader
            .read_line(&mut input)
            .await
            .map_err(|e| Error::io("Failed to read user input", e))?;

        if bytes == 0 {
            debug!("End of input, leaving menu");
            return Ok(MenuAction::Exit);
        }

        match parse_menu_selection(&input) {
            Ok(action) => return Ok(action),
            Err(error) => {
                debug!("Rejected menu input '{}'", input.trim());
                let message = if color {
                    error.to_string().bright_red().to_string()
                } else {
                    error.to_string()
                };
                writeln!(writer, "{}", message).map_err(write_error)?;
                write!(writer, "{}", render_menu(color)).map_err(write_error)?;
                writer.flush().map_err(write_error)?;
            }
        }
    }
}
