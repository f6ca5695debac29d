// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Content type lookup for object uploads.

/// Returns the MIME type registered for the extension of `path`.
///
/// Returns an empty string if the path has no extension, or the extension is
/// not in the table.
///
/// # Example
/// ```
/// # use google_cloud_storage_service::mime::mime_type_for;
/// assert_eq!(mime_type_for("a/b/file.json"), "application/json");
/// assert_eq!(mime_type_for("a/b/file.unknownext"), "");
/// ```
pub fn mime_type_for<P: AsRef<std::path::Path>>(path: P) -> String {
    mime_guess::from_path(path)
        .first()
        .map(|m| m.essence_str().to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("a/b/file.json", "application/json")]
    #[test_case("file.txt", "text/plain")]
    #[test_case("images/photo.png", "image/png")]
    #[test_case("images/photo.JPG", "image/jpeg")]
    #[test_case("index.html", "text/html")]
    #[test_case("a/b/file.unknownext", "")]
    #[test_case("a/b/no-extension", "")]
    #[test_case("", "")]
    fn lookup(path: &str, want: &str) {
        assert_eq!(mime_type_for(path), want);
    }
}
