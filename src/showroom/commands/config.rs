use super::CmdResult;
use crate::config::SiteConfig;
use crate::error::Result;

pub fn run(config: &SiteConfig) -> Result<CmdResult> {
    config.validate()?;
    Ok(CmdResult::default().with_config(config.clone()))
}
