/// Single-page front end served at `/`.
///
/// The generated text is revealed a few characters at a time once the full response
/// has arrived; the server itself never streams. The script keeps one explicit state
/// (`idle`, `generating`, `generated`, `failed`) and only the latest click may settle it.
pub const UPLOAD_PAGE_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>MCQs Creator App</title>
<style>
  body { font-family: sans-serif; display: flex; margin: 0; }
  aside { width: 18rem; padding: 20px; background: #F0F0F0; min-height: 100vh; }
  main { flex: 1; padding: 20px; }
  h1 { text-align: center; color: #FF4B4B; }
  label { display: block; margin-top: 1rem; }
  #result { background: #F0F0F0; padding: 20px; border-radius: 10px; white-space: pre-wrap; word-wrap: break-word; }
  #error { color: #B00020; }
</style>
</head>
<body>
<aside>
  <h2>Settings</h2>
  <label>Choose a PDF | Text file <input id="file" type="file" accept=".txt,.pdf"></label>
  <label>Number of Questions <input id="count" type="number" min="1" max="70" value="5"></label>
  <label>Difficulty Level
    <select id="difficulty"><option>Easy</option><option>Medium</option><option>Hard</option></select>
  </label>
  <label>Select Language
    <select id="language">
      <option>English</option><option>Spanish</option><option>French</option><option>German</option>
      <option>Bangla</option><option>Hindi</option><option>Arabic</option>
    </select>
  </label>
  <p><button id="generate">Generate</button></p>
</aside>
<main>
  <h1>MCQ Generator</h1>
  <p id="error"></p>
  <pre id="result" hidden></pre>
  <p id="exports" hidden>
    <button data-format="pdf">Download PDF</button>
    <button data-format="docx">Download Word</button>
  </p>
</main>
<script>
const result = document.getElementById("result");
const error = document.getElementById("error");
const exportsBar = document.getElementById("exports");

// idle | generating | generated | failed
let state = { kind: "idle" };
let latestAttempt = 0;

function render() {
  result.hidden = state.kind === "idle" || state.kind === "failed";
  exportsBar.hidden = state.kind !== "generated";
  error.textContent = state.kind === "failed" ? state.message : "";
  if (state.kind === "generating") result.textContent = "Generating Multi Choice Questions...";
  if (state.kind === "generated") reveal(state);
  if (state.kind !== "generated" && state.kind !== "generating") result.textContent = "";
}

function reveal(shownState) {
  const text = shownState.text;
  let shown = 0;
  const step = () => {
    if (state !== shownState) return;
    shown = Math.min(text.length, shown + 24);
    result.textContent = text.slice(0, shown);
    if (shown < text.length) requestAnimationFrame(step);
  };
  step();
}

function toBase64(file) {
  return new Promise((resolve, reject) => {
    const reader = new FileReader();
    reader.onload = () => resolve(reader.result.split(",")[1] || "");
    reader.onerror = () => reject(reader.error);
    reader.readAsDataURL(file);
  });
}

async function readError(response, fallback) {
  try {
    const payload = JSON.parse(await response.text());
    return payload.error || fallback;
  } catch (_) {
    return `${fallback} (HTTP ${response.status})`;
  }
}

document.getElementById("generate").addEventListener("click", async () => {
  const attempt = ++latestAttempt;
  const settle = (next) => {
    if (attempt !== latestAttempt) return;
    state = next;
    render();
  };

  settle({ kind: "generating" });
  try {
    const file = document.getElementById("file").files[0];
    const body = {
      count: Number(document.getElementById("count").value) || null,
      difficulty: document.getElementById("difficulty").value,
      language: document.getElementById("language").value,
    };
    if (file) {
      body.file_name = file.name;
      body.file_base64 = await toBase64(file);
    }
    const response = await fetch("/api/mcqs", {
      method: "POST",
      headers: { "content-type": "application/json" },
      body: JSON.stringify(body),
    });
    if (!response.ok) {
      settle({ kind: "failed", message: await readError(response, "Generation failed") });
      return;
    }
    const payload = await response.json();
    if (payload.status === "generated") {
      settle({ kind: "generated", text: payload.mcqs });
    } else {
      settle({ kind: "failed", message: payload.error || "Generation failed" });
    }
  } catch (e) {
    settle({ kind: "failed", message: `Generation failed: ${e.message || e}` });
  }
});

exportsBar.addEventListener("click", async (event) => {
  const format = event.target.dataset.format;
  if (!format || state.kind !== "generated") return;
  try {
    const response = await fetch(`/api/exports/${format}`, {
      method: "POST",
      headers: { "content-type": "application/json" },
      body: JSON.stringify({ text: state.text }),
    });
    if (!response.ok) {
      error.textContent = await readError(response, "Export failed");
      return;
    }
    const link = document.createElement("a");
    link.href = URL.createObjectURL(await response.blob());
    link.download = `mcqs.${format}`;
    link.click();
  } catch (e) {
    error.textContent = `Export failed: ${e.message || e}`;
  }
});
</script>
</body>
</html>
"#;
