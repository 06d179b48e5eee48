//! Standalone HTML page for a garden plan.
use glam::UVec2;
use sow::prelude::*;

use super::{legend, symbol_for};

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

/// Format a plan as standalone HTML with embedded CSS.
///
/// Cells are shaded by the 3x3 zone they fall in.
pub fn render_html(plan: &GardenPlan, catalog: &Catalog) -> String {
    let mut html = String::with_capacity(4096);

    html.push_str("<!DOCTYPE html>\n<html>\n<head>\n");
    html.push_str("<meta charset=\"UTF-8\">\n");
    html.push_str("<title>Garden Plan</title>\n");
    html.push_str("<style>\n");
    html.push_str("body { font-family: system-ui, sans-serif; max-width: 960px; margin: 40px auto; padding: 20px; line-height: 1.6; }\n");
    html.push_str("h1 { color: #2c3e50; margin-bottom: 10px; }\n");
    html.push_str("h2 { color: #34495e; border-bottom: 2px solid #ecf0f1; padding-bottom: 5px; margin-top: 30px; }\n");
    html.push_str(".plot { border-collapse: collapse; }\n");
    html.push_str(".plot td { width: 32px; height: 32px; text-align: center; font-size: 20px; border: 1px solid #dfe6e9; }\n");
    html.push_str(".zone-a { background: #f4fbf4; }\n");
    html.push_str(".zone-b { background: #e8f5e9; }\n");
    html.push_str(".warning { background: #fff3cd; border-left: 4px solid #ffc107; padding: 15px; margin: 15px 0; border-radius: 4px; }\n");
    html.push_str("table.summary { width: 100%; border-collapse: collapse; margin: 16px 0; }\n");
    html.push_str("th { background: #34495e; color: white; text-align: left; padding: 12px; font-weight: 600; }\n");
    html.push_str("table.summary td { padding: 12px; border-bottom: 1px solid #ecf0f1; }\n");
    html.push_str("</style>\n</head>\n<body>\n");

    html.push_str("<h1>🏡 Garden Plan</h1>\n");
    html.push_str(&format!(
        "<p>{}x{} feet ({} sq ft), {:.1}% used</p>\n",
        plan.width,
        plan.height,
        u64::from(plan.width) * u64::from(plan.height),
        plan.space_utilization_percent
    ));

    // Layout
    html.push_str("<h2>Layout</h2>\n<table class=\"plot\">\n");
    for (y, row) in plan.grid.rows().enumerate() {
        html.push_str("<tr>");
        for (x, cell) in row.iter().enumerate() {
            let at = UVec2::new(x as u32, y as u32);
            let zone = plan
                .zones
                .iter()
                .find(|z| z.contains(at))
                .map(|z| z.index)
                .unwrap_or(0);
            let class = if zone % 2 == 0 { "zone-a" } else { "zone-b" };
            match cell.as_deref() {
                Some(kind) => html.push_str(&format!(
                    "<td class=\"{class}\" title=\"{}\">{}</td>",
                    escape(catalog.display_name(kind)),
                    escape(symbol_for(catalog, kind))
                )),
                None => html.push_str(&format!("<td class=\"{class}\"></td>")),
            }
        }
        html.push_str("</tr>\n");
    }
    html.push_str("</table>\n");

    html.push_str("<h2>Legend</h2>\n<ul>\n");
    for (_, symbol, name) in legend(&plan.grid, catalog) {
        html.push_str(&format!(
            "<li>{} {}</li>\n",
            escape(symbol),
            escape(name)
        ));
    }
    html.push_str("</ul>\n");

    // Summary
    html.push_str("<h2>Plants</h2>\n");
    html.push_str("<table class=\"summary\">\n<thead><tr><th>Plant</th><th>Quantity</th><th>Space Used</th><th>Expected Yield</th></tr></thead>\n<tbody>\n");
    for plant in &plan.summary {
        html.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td>{} sq ft</td><td>{:.1} {}</td></tr>\n",
            escape(&plant.name),
            plant.quantity_placed,
            plant.space_used,
            plant.expected_yield_display(),
            escape(&plant.yield_unit)
        ));
    }
    html.push_str("</tbody>\n</table>\n");

    if !plan.warnings.is_empty() {
        html.push_str("<h2>Companion Warnings</h2>\n");
        for warning in &plan.warnings {
            html.push_str(&format!(
                "<div class=\"warning\"><p>⚠️ {}</p></div>\n",
                escape(warning)
            ));
        }
    }

    html.push_str("</body>\n</html>\n");
    html
}
