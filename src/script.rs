/// Render the companion script for an ordered list of device names
///
/// The script adds one `device-<name>` class per name to `document.body` once the DOM
/// is ready, leaving existing classes in place.
pub fn render_script<S: AsRef<str>>(names: &[S]) -> String {
    let mut js = String::new();

    js.push_str("(function () {\n");
    js.push_str("  function tagBody() {\n");
    js.push_str("    var classNames = [];\n");
    for name in names {
        js.push_str(&format!("    classNames.push('device-{}');\n", name.as_ref()));
    }
    js.push_str("    classNames.forEach(function (name) {\n");
    js.push_str("      document.body.classList.add(name);\n");
    js.push_str("    });\n");
    js.push_str("  }\n");
    js.push_str("  if (document.readyState === 'loading') {\n");
    js.push_str("    document.addEventListener('DOMContentLoaded', tagBody);\n");
    js.push_str("  } else {\n");
    js.push_str("    tagBody();\n");
    js.push_str("  }\n");
    js.push_str("})();\n");
    js
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classes_pushed_in_order() {
        let js = render_script(&["iphone-xr", "ipad", "pixel-7"]);
        let pushes: Vec<&str> = js
            .lines()
            .filter(|line| line.contains("classNames.push"))
            .map(str::trim)
            .collect();
        assert_eq!(
            pushes,
            [
                "classNames.push('device-iphone-xr');",
                "classNames.push('device-ipad');",
                "classNames.push('device-pixel-7');",
            ]
        );
    }

    #[test]
    fn test_script_keeps_existing_classes() {
        let js = render_script(&[String::from("a")]);
        assert!(js.starts_with("(function () {"));
        assert!(js.ends_with("})();\n"));
        assert!(js.contains("classList.add(name)"));
        assert!(!js.contains("className ="));
    }
}
