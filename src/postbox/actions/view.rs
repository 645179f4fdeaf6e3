use super::Outcome;
use crate::error::Result;
use crate::prompt::{DisplayMode, Message, Prompt};
use crate::select::{self, Selection};
use crate::store::{DocumentBackend, PostStore};

pub fn run<B: DocumentBackend>(store: &mut PostStore<B>, ui: &impl Prompt) -> Result<Outcome> {
    let id = match select::resolve(store, ui)? {
        Selection::Chosen(id) => id,
        Selection::NotFound => {
            ui.report(&Message::error("Post not found!"));
            return Ok(Outcome::Done);
        }
        Selection::ToMenu => return Ok(Outcome::ToMenu),
        Selection::Terminate => return Ok(Outcome::Terminate),
    };

    let Some(post) = store.find(&id) else {
        ui.report(&Message::error("Post not found!"));
        return Ok(Outcome::Done);
    };

    let mode = match ui.select("How should it be shown?", &["Full post", "Table row"])? {
        1 => DisplayMode::Table,
        _ => DisplayMode::Detail,
    };

    ui.report(&Message::info(format!("Viewing post: [id={}]...", post.id)));
    ui.show_post(post, mode);
    Ok(Outcome::Done)
}
