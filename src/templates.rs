use std::collections::HashMap;

use chrono::{Datelike, Utc};
use tera::Tera;

use crate::classnames::cn_function;
use crate::config::SiteConfig;
use crate::error::AppError;

/// Initialize the Tera template engine
pub fn init_templates(site: &SiteConfig) -> Result<Tera, AppError> {
    let mut tera = Tera::new(&site.template_glob())?;

    tera.register_function("cn", cn_function);
    tera.register_function("current_year", current_year_function);

    if tera.get_template_names().next().is_none() {
        return Err(AppError::Internal(format!(
            "No templates found in '{}'",
            site.templates_dir
        )));
    }

    Ok(tera)
}

/// Current year for the footer copyright line
fn current_year_function(_args: &HashMap<String, tera::Value>) -> tera::Result<tera::Value> {
    Ok(tera::Value::from(Utc::now().year()))
}
