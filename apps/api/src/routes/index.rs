use axum::response::Html;

const UPLOAD_FORM: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>Resume ATS Checker</title>
</head>
<body>
  <h1>Resume ATS Checker</h1>
  <form id="upload-form" action="/upload" method="post" enctype="multipart/form-data">
    <label for="resume">Resume (.txt, .docx, .pdf)</label>
    <input type="file" id="resume" name="resume" accept=".txt,.docx,.pdf" required>
    <label for="job_description">Job description</label>
    <textarea id="job_description" name="job_description" rows="12" cols="80" required></textarea>
    <button type="submit">Analyze</button>
  </form>
  <pre id="result"></pre>
  <script>
    document.getElementById("upload-form").addEventListener("submit", async (event) => {
      event.preventDefault();
      const response = await fetch("/upload", { method: "POST", body: new FormData(event.target) });
      const body = await response.json();
      document.getElementById("result").textContent = JSON.stringify(body, null, 2);
    });
  </script>
</body>
</html>
"#;

/// GET /
/// Serves the upload form.
pub async fn index_handler() -> Html<&'static str> {
    Html(UPLOAD_FORM)
}
