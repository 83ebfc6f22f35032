use std::{
    borrow::Borrow,
    env::{self, VarError},
};

use anyhow::{anyhow, Context as _, Result};

const TRUTHY_VALUES: [&str; 5] = ["1", "y", "Y", "yes", "true"];

pub trait ReadFromVar: Sized {
    fn read_from_var<S>(variable: S) -> Result<Self>
    where
        S: Borrow<str> + Into<String>;

    /// Same as [`ReadFromVar::read_from_var`], except that an unset variable
    /// yields `None` instead of an error. Set but malformed values are still
    /// reported.
    fn read_optional_from_var<S>(variable: S) -> Result<Option<Self>>
    where
        S: Borrow<str> + Into<String>,
    {
        if is_set(variable.borrow())? {
            Self::read_from_var(variable).map(Some)
        } else {
            Ok(None)
        }
    }
}

fn is_set(variable: &str) -> Result<bool> {
    match env::var(variable) {
        Ok(_) => Ok(true),
        Err(VarError::NotPresent) => Ok(false),
        Err(error) => Err(anyhow!(error).context(format!(
            "Environment variable {variable:?} is not valid unicode!"
        ))),
    }
}

impl ReadFromVar for String {
    fn read_from_var<S>(variable: S) -> Result<Self>
    where
        S: Borrow<str> + Into<String>,
    {
        let variable = variable.borrow();

        env::var(variable).with_context(|| {
            format!("Failed to read environment variable {variable:?}!")
        })
    }
}

impl ReadFromVar for bool {
    fn read_from_var<S>(variable: S) -> Result<Self>
    where
        S: Borrow<str> + Into<String>,
    {
        String::read_from_var(variable)
            .map(|value| TRUTHY_VALUES.contains(&value.as_str()))
    }
}
