// src/present/page.rs

/// Dashboard page; fills its selectors and map from the JSON routes.
pub const INDEX_HTML: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>FIFA World Cup Dashboard</title>
<script src="https://cdn.plot.ly/plotly-2.35.2.min.js"></script>
<style>
  body { font-family: sans-serif; margin: 0; }
  h1 { text-align: center; margin-top: 20px; color: #1a1a1a; font-weight: bold; }
  .row { display: flex; justify-content: space-between; }
  .pick { width: 48%; padding: 20px; box-sizing: border-box; }
  .pick label { font-weight: bold; display: block; margin-bottom: 6px; }
  .pick select { width: 100%; padding: 6px; }
  .out { margin-top: 10px; min-height: 1.2em; }
  #map { padding: 0 40px 40px 40px; height: 520px; }
</style>
</head>
<body>
<h1>FIFA World Cup Dashboard</h1>
<div class="row">
  <div class="pick">
    <label for="country">Select a Country:</label>
    <select id="country"><option value="">Choose a country</option></select>
    <div id="country-output" class="out"></div>
  </div>
  <div class="pick">
    <label for="year">Select a Year:</label>
    <select id="year"><option value="">Choose a year</option></select>
    <div id="year-output" class="out"></div>
  </div>
</div>
<div id="map"></div>
<script>
async function getJson(path) {
  const res = await fetch(path);
  return res.json();
}

function fill(select, values) {
  for (const v of values) {
    const opt = document.createElement("option");
    opt.value = v;
    opt.textContent = v;
    select.appendChild(opt);
  }
}

async function show(select, route, param, output) {
  const q = encodeURIComponent(select.value);
  const body = await getJson(`${route}?${param}=${q}`);
  document.getElementById(output).textContent = body.message;
}

async function init() {
  const country = document.getElementById("country");
  const year = document.getElementById("year");
  const options = await getJson("/api/options");
  fill(country, options.countries);
  fill(year, options.years);
  country.addEventListener("change", () => show(country, "/api/country", "name", "country-output"));
  year.addEventListener("change", () => show(year, "/api/year", "year", "year-output"));

  const wins = await getJson("/api/wins");
  Plotly.newPlot("map", [{
    type: "choropleth",
    locationmode: "country names",
    locations: wins.map(w => w.location),
    z: wins.map(w => w.titles),
    text: wins.map(w => w.country),
    colorscale: "Blues",
    reversescale: true,
    colorbar: { title: "Titles" },
  }], {
    title: { text: "FIFA World Cup Wins by Country", x: 0.5 },
    geo: { showframe: false, showcoastlines: true },
    margin: { t: 60, l: 0, r: 0, b: 0 },
  });
}

init();
</script>
</body>
</html>
"##;
