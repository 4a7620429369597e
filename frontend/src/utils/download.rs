use percent_encoding::percent_decode_str;

pub const XLSX_MIME: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// Pulls the filename out of a `Content-Disposition` header value.
/// Accepts quoted, bare and RFC 5987 (`filename*=UTF-8''...`) forms.
pub fn filename_from_content_disposition(header: &str) -> Option<String> {
    let mut plain = None;
    for part in header.split(';').map(str::trim) {
        let Some((key, value)) = part.split_once('=') else {
            continue;
        };
        let key = key.trim().to_ascii_lowercase();
        let value = value.trim();
        if key == "filename*" {
            let encoded = value
                .split_once("''")
                .map(|(_, rest)| rest)
                .unwrap_or(value);
            if let Some(name) = decode_filename(encoded) {
                return Some(name);
            }
        } else if key == "filename" && plain.is_none() {
            plain = decode_filename(value);
        }
    }
    plain
}

fn decode_filename(raw: &str) -> Option<String> {
    let stripped = raw.trim().trim_matches(|c| c == '"' || c == '\'');
    if stripped.is_empty() {
        return None;
    }
    let decoded = percent_decode_str(stripped)
        .decode_utf8()
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| stripped.to_string());
    Some(decoded)
}

#[cfg(target_arch = "wasm32")]
pub fn trigger_bytes_download(filename: &str, mime: &str, bytes: &[u8]) -> Result<(), String> {
    use wasm_bindgen::JsCast;

    let array = js_sys::Array::new();
    array.push(&js_sys::Uint8Array::from(bytes));
    let options = web_sys::BlobPropertyBag::new();
    options.set_type(mime);
    let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&array, &options)
        .map_err(|_| "Failed to create blob".to_string())?;

    let url = web_sys::Url::create_object_url_with_blob(&blob)
        .map_err(|_| "Failed to create object URL".to_string())?;

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or("No document")?;
    let anchor = document
        .create_element("a")
        .map_err(|_| "Failed to create link".to_string())?
        .dyn_into::<web_sys::HtmlAnchorElement>()
        .map_err(|_| "Failed to cast anchor".to_string())?;
    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor.style().set_property("display", "none").ok();
    document
        .body()
        .ok_or("No body")?
        .append_child(&anchor)
        .map_err(|_| "Append failed".to_string())?;
    anchor.click();
    anchor.remove();
    let _ = web_sys::Url::revoke_object_url(&url);
    Ok(())
}

#[cfg(not(target_arch = "wasm32"))]
pub fn trigger_bytes_download(filename: &str, _mime: &str, bytes: &[u8]) -> Result<(), String> {
    log::info!("[download] {} ({} bytes) skipped outside the browser", filename, bytes.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_quoted_and_bare_filenames() {
        assert_eq!(
            filename_from_content_disposition(r#"attachment; filename="report.xlsx""#).as_deref(),
            Some("report.xlsx")
        );
        assert_eq!(
            filename_from_content_disposition("attachment; filename=report_2025.xlsx").as_deref(),
            Some("report_2025.xlsx")
        );
    }

    #[test]
    fn decodes_percent_encoded_names() {
        assert_eq!(
            filename_from_content_disposition(
                "attachment; filename=\"fallback.xlsx\"; filename*=UTF-8''B%C3%A1o%20c%C3%A1o.xlsx"
            )
            .as_deref(),
            Some("Báo cáo.xlsx")
        );
        assert_eq!(
            filename_from_content_disposition("attachment; filename=Bao%20Cao.xlsx").as_deref(),
            Some("Bao Cao.xlsx")
        );
    }

    #[test]
    fn missing_filename_yields_none() {
        assert_eq!(filename_from_content_disposition("attachment"), None);
        assert_eq!(filename_from_content_disposition("attachment; filename=\"\""), None);
    }
}
