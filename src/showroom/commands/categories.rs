use super::{listing_model, CmdResult};
use crate::config::SiteConfig;
use crate::error::Result;
use crate::model::ContentKind;
use crate::store::ContentSource;

pub fn run<S: ContentSource>(source: &S, config: &SiteConfig, kind: ContentKind) -> Result<CmdResult> {
    let model = listing_model(source, config, kind)?;
    Ok(CmdResult::default().with_categories(model.categories().to_vec()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures;

    #[test]
    fn returns_sorted_categories() {
        let source = fixtures::source();
        let result = run(&source, &SiteConfig::default(), ContentKind::Blogs).unwrap();
        assert_eq!(result.categories, ["Guides", "News"]);
    }
}
