use rocket_dyn_templates::handlebars::{
    Context, Handlebars, Helper, HelperDef, HelperResult, Output, RenderContext, RenderError,
};

use crate::modules::helpers::handlebars::params::check_param_count;

/// # lap count formatting helper
///
/// ### usage
/// ```handlebars
/// {{formatLaps 1}}
/// {{formatLaps 12}}
/// ```
///
/// ### output
/// ```text
/// 1 Runde
/// 12 Runden
/// ```
#[derive(Clone, Copy)]
pub struct FormatLaps;

impl HelperDef for FormatLaps {
    fn call<'reg: 'rc, 'rc>(
        &self,
        helper: &Helper<'reg, 'rc>,
        _: &'reg Handlebars<'reg>,
        _: &'rc Context,
        _: &mut RenderContext<'reg, 'rc>,
        out: &mut dyn Output,
    ) -> HelperResult {
        check_param_count(helper, 1)?;

        let laps = helper
            .param(0)
            .and_then(|param| param.value().as_i64())
            .ok_or_else(|| RenderError::new("formatLaps expects a number"))?;

        out.write(&format_laps(laps))?;
        Ok(())
    }
}

pub fn format_laps(laps: i64) -> String {
    if laps == 1 {
        format!("{laps} Runde")
    } else {
        format!("{laps} Runden")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn render(template: &str, data: serde_json::Value) -> Result<String, String> {
        let mut handlebars = Handlebars::new();
        handlebars.register_helper("formatLaps", Box::new(FormatLaps));
        handlebars.render_template(template, &data).map_err(|e| e.to_string())
    }

    #[test]
    fn singular_and_plural() {
        assert_eq!(render("{{formatLaps laps}}", json!({ "laps": 1 })).unwrap(), "1 Runde");
        assert_eq!(render("{{formatLaps laps}}", json!({ "laps": 0 })).unwrap(), "0 Runden");
        assert_eq!(render("{{formatLaps laps}}", json!({ "laps": 42 })).unwrap(), "42 Runden");
    }

    #[test]
    fn rejects_non_numbers() {
        assert!(render("{{formatLaps laps}}", json!({ "laps": "viele" })).is_err());
        assert!(render("{{formatLaps 1 2}}", json!({})).is_err());
    }
}
