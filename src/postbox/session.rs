//! The interactive session loop.
//!
//! An explicit, iterative state machine: menu, dispatch, then a
//! what-next question after each completed action. Long sessions never
//! grow the call stack, and "exit" travels as a plain value.

use crate::actions::{self, Action, Outcome};
use crate::error::Result;
use crate::prompt::Prompt;
use crate::store::{DocumentBackend, PostStore};

/// Where the loop goes after the what-next question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Repeat,
    Menu,
    Exit,
}

/// Drive the session until the user leaves. Interrupts and I/O failures
/// surface as errors; the caller owns the closing message either way.
pub fn run<B: DocumentBackend>(store: &mut PostStore<B>, ui: &impl Prompt) -> Result<()> {
    'menu: loop {
        let action = menu(ui)?;
        if action == Action::Exit {
            return Ok(());
        }

        loop {
            match dispatch(action, store, ui)? {
                Outcome::Terminate => return Ok(()),
                Outcome::ToMenu => continue 'menu,
                Outcome::Done => {}
            }

            match confirm_next(ui)? {
                Flow::Repeat => continue,
                Flow::Menu => continue 'menu,
                Flow::Exit => return Ok(()),
            }
        }
    }
}

fn menu(ui: &impl Prompt) -> Result<Action> {
    let labels: Vec<&str> = Action::MENU.iter().map(|a| a.label()).collect();
    let choice = ui.select("What would you like to do?", &labels)?;
    Ok(Action::MENU[choice])
}

fn dispatch<B: DocumentBackend>(
    action: Action,
    store: &mut PostStore<B>,
    ui: &impl Prompt,
) -> Result<Outcome> {
    match action {
        Action::Create => {
            actions::create::run(store, ui)?;
            Ok(Outcome::Done)
        }
        Action::View => actions::view::run(store, ui),
        Action::Edit => actions::edit::run(store, ui),
        Action::Delete => actions::delete::run(store, ui),
        // The menu turns Exit into termination before dispatching.
        Action::Exit => Ok(Outcome::Terminate),
    }
}

fn confirm_next(ui: &impl Prompt) -> Result<Flow> {
    let choice = ui.select(
        "What next?",
        &["Do it again", "Back to the menu", "Exit"],
    )?;
    Ok(match choice {
        0 => Flow::Repeat,
        1 => Flow::Menu,
        _ => Flow::Exit,
    })
}
