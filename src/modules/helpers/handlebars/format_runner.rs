use rocket_dyn_templates::handlebars::{
    html_escape, Context, Handlebars, Helper, HelperDef, HelperResult, Output, RenderContext, RenderError,
};
use serde::Deserialize;

use crate::modules::helpers::handlebars::params::check_param_count;

/// # runner name formatting helper
/// renders a leaderboard entry as `First Last (number)`.
/// placeholders only show their name.
///
/// ### usage
/// ```handlebars
/// {{formatRunner this}}
/// ```
#[derive(Clone, Copy)]
pub struct FormatRunner;

#[derive(Deserialize)]
struct RunnerName {
    number: i32,
    first_name: String,
    last_name: String,
    #[serde(default)]
    placeholder: bool,
}

impl HelperDef for FormatRunner {
    fn call<'reg: 'rc, 'rc>(
        &self,
        helper: &Helper<'reg, 'rc>,
        _: &'reg Handlebars<'reg>,
        _: &'rc Context,
        _: &mut RenderContext<'reg, 'rc>,
        out: &mut dyn Output,
    ) -> HelperResult {
        check_param_count(helper, 1)?;

        let value = match helper.param(0) {
            Some(param) => param.value().clone(),
            None => return Ok(()),
        };
        let runner: RunnerName = serde_json::from_value(value)
            .map_err(|error| RenderError::new(format!("formatRunner expects a runner: {error}")))?;

        // the output is written unescaped
        let name = html_escape(format!("{} {}", runner.first_name, runner.last_name).trim());
        if runner.placeholder {
            out.write(&name)?;
        } else {
            out.write(&format!("{} ({})", name, runner.number))?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn render(data: serde_json::Value) -> String {
        let mut handlebars = Handlebars::new();
        handlebars.register_helper("formatRunner", Box::new(FormatRunner));
        handlebars.render_template("{{formatRunner runner}}", &data).unwrap()
    }

    #[test]
    fn shows_name_and_number() {
        let data = json!({ "runner": { "number": 7, "first_name": "Anna", "last_name": "Schmidt", "placeholder": false } });
        assert_eq!(render(data), "Anna Schmidt (7)");
    }

    #[test]
    fn placeholders_hide_their_number() {
        let data = json!({ "runner": { "number": 2, "first_name": "Niemand", "last_name": "", "placeholder": true } });
        assert_eq!(render(data), "Niemand");
    }

    #[test]
    fn names_are_escaped() {
        let data = json!({ "runner": { "number": 3, "first_name": "<b>", "last_name": "O'Neil", "placeholder": false } });
        assert_eq!(render(data), "&lt;b&gt; O&#x27;Neil (3)");
    }
}
