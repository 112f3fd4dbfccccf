//! Handler for `adamsboot --list-modules`.

use miette::Result;

use adamsboot_core::config::GlobalConfig;

pub fn exec(config: &GlobalConfig) -> Result<()> {
    let rt = super::runtime()?;
    rt.block_on(adamsboot_ops::ops_modules::list_modules(config))
}
