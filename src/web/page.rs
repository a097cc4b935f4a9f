pub const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>Herbal Plant Identification</title>
<style>
body { background: linear-gradient(to right, #e8f5e9, #ffffff); font-family: sans-serif; margin: 0; padding: 2rem; }
h1 { text-align: center; color: #1b5e20; }
p.lead { text-align: center; }
.row { display: flex; gap: 1rem; flex-wrap: wrap; }
.row > label { flex: 1 1 300px; }
label { display: block; margin-bottom: 1rem; font-weight: bold; }
input[type=text], textarea { width: 100%; box-sizing: border-box; padding: .5rem; font: inherit; }
textarea { min-height: 4rem; }
button { width: 100%; padding: .75rem; background: #2e7d32; color: #fff; border: 0; border-radius: 4px; font-size: 1rem; cursor: pointer; }
button:disabled { background: #9e9e9e; }
#error { color: #b71c1c; }
</style>
</head>
<body>
<h1>&#127807; AI Herbal Plant Identification &amp; Recommendation System</h1>
<p class="lead">Upload a leaf image and enter symptoms to get AI-based herbal guidance.</p>

<form id="analyze">
  <div class="row">
    <label>Upload Leaf Image<input type="file" name="image" accept="image/*" required></label>
    <label>Enter Symptoms (e.g. cough, fever)<input type="text" name="symptoms"></label>
  </div>
  <button type="submit">Analyze with AI</button>
</form>
<p id="error"></p>

<div class="row">
  <label>Predicted Plant<input type="text" id="plant" readonly></label>
  <label>Confidence<input type="text" id="confidence" readonly></label>
</div>
<label>Herbal Benefits<textarea id="benefit" readonly></textarea></label>
<label>Recommended Herbs<input type="text" id="recommended" readonly></label>

<script>
const form = document.getElementById("analyze");
form.addEventListener("submit", async (event) => {
  event.preventDefault();
  const button = form.querySelector("button");
  const error = document.getElementById("error");
  button.disabled = true;
  error.textContent = "";
  try {
    const response = await fetch("/api/predict", { method: "POST", body: new FormData(form) });
    const body = await response.json();
    if (!response.ok) {
      throw new Error(body.error || response.statusText);
    }
    for (const field of ["plant", "confidence", "benefit", "recommended"]) {
      document.getElementById(field).value = body[field];
    }
  } catch (e) {
    error.textContent = e.message;
  } finally {
    button.disabled = false;
  }
});
</script>
</body>
</html>
"#;
