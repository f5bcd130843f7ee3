//! Parsing of `#[inspect(...)]` attributes.

use syn::{Attribute, LitStr, Path};

/// Container-level options.
pub struct ContainerAttrs {
    pub describe: bool,
    pub name: Option<String>,
    pub krate: Path,
}

/// How a field's value is presented to the engine.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum FieldMode {
    Subject,
    Serialize,
    Display,
}

/// Field-level options.
pub struct FieldAttrs {
    pub skip: bool,
    pub omit_empty: bool,
    pub omit_nested: bool,
    pub rename: Option<String>,
    pub mode: FieldMode,
}

pub fn parse_container_attrs(attrs: &[Attribute]) -> syn::Result<ContainerAttrs> {
    let mut describe = false;
    let mut name = None;
    let mut krate = None;

    for attr in attrs {
        if !attr.path().is_ident("inspect") {
            continue;
        }
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("describe") {
                describe = true;
            } else if meta.path.is_ident("name") {
                let value: LitStr = meta.value()?.parse()?;
                name = Some(value.value());
            } else if meta.path.is_ident("crate") {
                let value: LitStr = meta.value()?.parse()?;
                krate = Some(value.parse::<Path>()?);
            } else {
                return Err(meta.error("unknown inspect container attribute"));
            }
            Ok(())
        })?;
    }

    Ok(ContainerAttrs {
        describe,
        name,
        krate: krate.unwrap_or_else(|| syn::parse_quote!(::logscope)),
    })
}

pub fn parse_field_attrs(attrs: &[Attribute]) -> syn::Result<FieldAttrs> {
    let mut parsed = FieldAttrs {
        skip: false,
        omit_empty: false,
        omit_nested: false,
        rename: None,
        mode: FieldMode::Subject,
    };

    for attr in attrs {
        if !attr.path().is_ident("inspect") {
            continue;
        }
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("skip") {
                parsed.skip = true;
            } else if meta.path.is_ident("omit_empty") {
                parsed.omit_empty = true;
            } else if meta.path.is_ident("omit_nested") {
                parsed.omit_nested = true;
            } else if meta.path.is_ident("rename") {
                let value: LitStr = meta.value()?.parse()?;
                parsed.rename = Some(value.value());
            } else if meta.path.is_ident("serialize") {
                parsed.mode = set_mode(&meta, parsed.mode, FieldMode::Serialize)?;
            } else if meta.path.is_ident("display") {
                parsed.mode = set_mode(&meta, parsed.mode, FieldMode::Display)?;
            } else {
                return Err(meta.error("unknown inspect field attribute"));
            }
            Ok(())
        })?;
    }

    Ok(parsed)
}

fn set_mode(
    meta: &syn::meta::ParseNestedMeta<'_>,
    current: FieldMode,
    requested: FieldMode,
) -> syn::Result<FieldMode> {
    if current != FieldMode::Subject && current != requested {
        return Err(meta.error("`serialize` and `display` are mutually exclusive"));
    }
    Ok(requested)
}
