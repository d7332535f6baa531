//! Static HTML pages.
//!
//! The browser front end is served elsewhere; these bodies only mark which
//! step of the flow the client reached.

fn page(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head><meta charset=\"utf-8\"><title>{title}</title></head>\n<body>\n{body}\n</body>\n</html>\n"
    )
}

pub fn index() -> String {
    page(
        "cryptgate",
        "<h1>cryptgate</h1>\n<p><a href=\"/generate\">Start a session</a></p>",
    )
}

/// Shown after a token was issued.
pub fn options() -> String {
    page(
        "Options",
        "<h1>Choose what to encrypt</h1>\n<ul>\n<li><a href=\"/cryptfile\">File</a></li>\n<li><a href=\"/crypttext\">Text</a></li>\n</ul>",
    )
}

pub fn cryptfile() -> String {
    page("Encrypt a file", "<h1>Encrypt a file</h1>")
}

pub fn crypttext() -> String {
    page(
        "Encrypt text",
        "<h1>Encrypt text</h1>\n<form method=\"post\" action=\"/uploadText\">\n<textarea name=\"plaintext\"></textarea>\n<button type=\"submit\">Encrypt</button>\n</form>",
    )
}

pub fn timedout() -> String {
    page(
        "Session timed out",
        "<h1>Session timed out</h1>\n<p><a href=\"/generate\">Start again</a></p>",
    )
}

pub fn success() -> String {
    page("Submitted", "<h1>Your text was submitted</h1>")
}
