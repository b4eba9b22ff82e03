use anyhow::Result;
use parkpasses_constants::ConstantsRegistry;
use std::io::Write;

pub(crate) fn get(registry: &ConstantsRegistry, key: &str, out: &mut impl Write) -> Result<()> {
    let value = registry.get(key)?;
    writeln!(out, "{value}")?;
    Ok(())
}

pub(crate) fn error(registry: &ConstantsRegistry, kind: &str, out: &mut impl Write) -> Result<()> {
    let message = registry.get_error(kind)?;
    writeln!(out, "{message}")?;
    Ok(())
}

pub(crate) fn export(registry: &ConstantsRegistry, pretty: bool, out: &mut impl Write) -> Result<()> {
    writeln!(out, "{}", registry.to_json(pretty)?)?;
    Ok(())
}

pub(crate) fn keys(registry: &ConstantsRegistry, out: &mut impl Write) -> Result<()> {
    for (key, _) in registry.entries() {
        writeln!(out, "{key}")?;
    }
    Ok(())
}
