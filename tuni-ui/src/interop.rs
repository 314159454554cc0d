use wasm_bindgen::JsCast;
use web_sys::{window, HtmlDocument};

/// Find `name` in a `document.cookie` string and return its raw value
pub fn cookie_value<'a>(cookies: &'a str, name: &str) -> Option<&'a str> {
    if name.is_empty() {
        return None;
    }

    cookies
        .split(';')
        .map(str::trim)
        .find_map(|cookie| cookie.strip_prefix(name)?.strip_prefix('='))
}

/// Read and URI-decode a cookie from the current document
pub fn read_cookie(name: &str) -> Option<String> {
    let document = window()?.document()?.dyn_into::<HtmlDocument>().ok()?;
    let cookies = document.cookie().ok()?;
    let raw = cookie_value(&cookies, name)?;

    match js_sys::decode_uri_component(raw) {
        Ok(decoded) => Some(String::from(decoded)),
        Err(e) => {
            log::warn!("cookie {} is not valid URI encoding: {:?}", name, e);
            Some(raw.to_string())
        }
    }
}

/// Scroll an element so its last child is visible
pub fn scroll_to_bottom(element_id: &str) {
    let Some(element) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(element_id))
    else {
        return;
    };
    element.set_scroll_top(element.scroll_height());
}

/// Add or remove a class on `<body>`
pub fn set_body_class(class: &str, enabled: bool) {
    let Some(body) = window().and_then(|w| w.document()).and_then(|d| d.body()) else {
        return;
    };

    let classes = body.class_list();
    let result = if enabled {
        classes.add_1(class)
    } else {
        classes.remove_1(class)
    };
    if let Err(e) = result {
        log::error!("failed to update body class {}: {:?}", class, e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_cookie_among_others() {
        let cookies = "sessionid=abc; csrftoken=tok%2B1; theme=dark";
        assert_eq!(cookie_value(cookies, "csrftoken"), Some("tok%2B1"));
        assert_eq!(cookie_value(cookies, "theme"), Some("dark"));
    }

    #[test]
    fn prefix_names_do_not_match() {
        let cookies = "csrftoken_old=stale; xcsrftoken=nope";
        assert_eq!(cookie_value(cookies, "csrftoken"), None);
    }

    #[test]
    fn empty_inputs_yield_none() {
        assert_eq!(cookie_value("", "csrftoken"), None);
        assert_eq!(cookie_value("a=b", ""), None);
    }

    #[test]
    fn value_may_be_empty_or_contain_equals() {
        assert_eq!(cookie_value("csrftoken=", "csrftoken"), Some(""));
        assert_eq!(cookie_value("csrftoken=a=b", "csrftoken"), Some("a=b"));
    }
}
