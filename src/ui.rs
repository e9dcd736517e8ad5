use crate::page::Page;
use crate::render::escape_html;

/// Fills every `{{NAME}}` slot of the page template in a single pass, so
/// region content is never scanned for further placeholders.
pub fn render_index(server_url: &str, page: &Page) -> String {
    let server = escape_html(server_url);
    let mut html = String::with_capacity(INDEX_HTML.len() + 512);
    let mut rest = INDEX_HTML;

    while let Some(start) = rest.find("{{") {
        html.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        let Some(end) = after.find("}}") else {
            html.push_str(&rest[start..]);
            return html;
        };

        let value = match &after[..end] {
            "SERVER" => server.as_str(),
            "SUBMIT_RESPONSE" => page.submit_response.as_str(),
            "UPDATE_CONFIRMATION" => page.update_confirmation.as_str(),
            "VIEW" => page.view.as_str(),
            "SERVER_STATUS" => page.server_status.as_str(),
            _ => &rest[start..start + end + 4],
        };
        html.push_str(value);
        rest = &after[end + 2..];
    }

    html.push_str(rest);
    html
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Water Tracker</title>
  <style>
    :root {
      --water: #2f8fd8;
      --deep: #1f4e6b;
      --ink: #22313a;
      --muted: #6a7378;
      --line: #d6e4ee;
    }

    * { box-sizing: border-box; }

    body {
      margin: 0;
      min-height: 100vh;
      background: linear-gradient(180deg, #eef7fd, #cfe7f8);
      color: var(--ink);
      font-family: system-ui, "Segoe UI", sans-serif;
      display: flex;
      justify-content: center;
      padding: 40px 16px;
    }

    .app {
      width: min(820px, 100%);
      display: grid;
      gap: 20px;
    }

    h1 { margin: 0; font-size: 2.2rem; color: var(--deep); }
    h2 { margin: 0; font-size: 1.1rem; color: var(--deep); }

    .subtitle, .hint { margin: 0; color: var(--muted); }

    .panel {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));
      gap: 20px;
    }

    .card {
      background: white;
      border: 1px solid var(--line);
      border-radius: 12px;
      padding: 18px 20px;
      display: grid;
      gap: 12px;
    }

    label { display: grid; gap: 4px; font-size: 0.9rem; color: var(--muted); }

    input {
      border: 1px solid var(--line);
      border-radius: 8px;
      padding: 8px 10px;
      font: inherit;
    }

    .actions { display: flex; flex-wrap: wrap; gap: 8px; align-items: center; }

    button {
      border: none;
      border-radius: 8px;
      padding: 9px 16px;
      font: inherit;
      font-weight: 600;
      cursor: pointer;
      background: var(--water);
      color: white;
    }

    button.secondary { background: var(--deep); }

    .output { min-height: 1.2em; white-space: pre-line; }
    .output p { margin: 0 0 4px; }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <h1>Water Tracker</h1>
      <p class="subtitle">Log what you drink and check how close you are to your target.</p>
    </header>

    <section class="panel">
      <form class="card" method="post" action="/water/add">
        <h2>New reading</h2>
        <label>Water intake (ml)
          <input id="water_intake" name="water_intake" inputmode="numeric" required />
        </label>
        <label>Target (ml)
          <input id="target" name="target" inputmode="numeric" required />
        </label>
        <div class="actions">
          <button type="submit">Send</button>
        </div>
        <div id="serverResponse" class="output">{{SUBMIT_RESPONSE}}</div>
      </form>

      <form class="card" method="post" action="/water/update">
        <h2>Drink more</h2>
        <label>Amount (ml)
          <input id="water_intake_update" name="water_intake_update" inputmode="numeric" required />
        </label>
        <div class="actions">
          <button type="submit">Update</button>
        </div>
        <div id="updateResponse" class="output">{{UPDATE_CONFIRMATION}}</div>
      </form>
    </section>

    <section class="card">
      <h2>History</h2>
      <div class="actions">
        <form method="post" action="/water/view">
          <button type="submit" class="secondary">View water</button>
        </form>
        <form method="post" action="/water/percentage">
          <button type="submit" class="secondary">Percentage</button>
        </form>
      </div>
      <form class="actions" method="post" action="/water/view_id">
        <input id="water_id" name="id" inputmode="numeric" placeholder="Reading id" required />
        <button type="submit" class="secondary">View by id</button>
      </form>
      <div id="waterView" class="output">{{VIEW}}</div>
    </section>

    <section class="card">
      <form class="actions" method="post" action="/water/status">
        <button type="submit" class="secondary">Check server</button>
      </form>
      <div id="serverStatus" class="output">{{SERVER_STATUS}}</div>
      <p class="hint">Connected to {{SERVER}}</p>
    </section>
  </main>
</body>
</html>
"#;
