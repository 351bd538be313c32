use super::{CmdMessage, CmdResult};
use crate::detail::DetailSelection;
use crate::error::Result;
use crate::model::{ContentKind, ItemId};
use crate::store::ContentSource;

pub fn run<S: ContentSource>(source: &S, kind: ContentKind, id: &str) -> Result<CmdResult> {
    let items = source.items(kind)?;
    let mut selection = DetailSelection::new();
    selection.select_explicit(ItemId::from(id));

    let mut result = CmdResult::default();
    match selection.resolve(&items) {
        Some(item) => Ok(result.with_item(item.clone())),
        None => {
            result.add_message(CmdMessage::error(format!("No {} with id `{}`.", kind, id)));
            Ok(result)
        }
    }
}
