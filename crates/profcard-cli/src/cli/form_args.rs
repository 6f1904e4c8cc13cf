//! Form input shared by the card-building commands.

use anyhow::Result;
use clap::Args;
use profcard_core::form::FormField;
use profcard_core::{FormData, Platform};
use std::path::PathBuf;

/// Form fields from a JSON file and/or flags; flags win over file values.
#[derive(Debug, Clone, Default, Args)]
pub struct FormArgs {
    /// JSON form file with name, bio, linkedin, facebook, instagram, github keys.
    #[arg(long = "form", value_name = "FILE")]
    pub form_file: Option<PathBuf>,
    /// Full name.
    #[arg(long)]
    pub name: Option<String>,
    /// Short bio.
    #[arg(long)]
    pub bio: Option<String>,
    /// LinkedIn profile URL.
    #[arg(long)]
    pub linkedin: Option<String>,
    /// Facebook profile URL.
    #[arg(long)]
    pub facebook: Option<String>,
    /// Instagram profile URL.
    #[arg(long)]
    pub instagram: Option<String>,
    /// GitHub profile URL.
    #[arg(long)]
    pub github: Option<String>,
}

impl FormArgs {
    fn flag(&self, field: FormField) -> Option<&String> {
        match field {
            FormField::Name => self.name.as_ref(),
            FormField::Bio => self.bio.as_ref(),
            FormField::Link(Platform::Linkedin) => self.linkedin.as_ref(),
            FormField::Link(Platform::Facebook) => self.facebook.as_ref(),
            FormField::Link(Platform::Instagram) => self.instagram.as_ref(),
            FormField::Link(Platform::Github) => self.github.as_ref(),
        }
    }

    pub fn to_form_data(&self) -> Result<FormData> {
        let mut form = match &self.form_file {
            Some(path) => FormData::from_json_path(path)?,
            None => FormData::default(),
        };
        for field in FormField::ALL {
            if let Some(v) = self.flag(field) {
                *form.field_mut(field) = v.clone();
            }
        }
        Ok(form)
    }
}
