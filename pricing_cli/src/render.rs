//! Text rendering of breakdowns and catalogs.

use std::fmt::{self, Write};

use pricing_core::calculations::CostBreakdown;
use pricing_core::materials::TrussCatalog;
use pricing_core::order::Order;

/// Format a CZK amount with thin groups: 352 700 Kč
pub fn czk(value: f64) -> String {
    let whole = value.round() as i64;
    let digits = whole.abs().to_string();
    let mut grouped = String::new();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(c);
    }
    if whole < 0 {
        grouped.insert(0, '-');
    }
    format!("{} Kč", grouped)
}

/// Detailed breakdown with the order summary and steel weights
pub fn breakdown_report(order: &Order, breakdown: &CostBreakdown) -> Result<String, fmt::Error> {
    let mut out = String::new();
    writeln!(out, "═══════════════════════════════════════════════")?;
    writeln!(out, "  CENOVÁ KALKULACE ZAKÁZKY")?;
    writeln!(out, "═══════════════════════════════════════════════")?;
    writeln!(out)?;
    writeln!(out, "Zakázka:")?;
    writeln!(out, "  Typ stavby:     {}", order.building_type)?;
    writeln!(out, "  Typ vazníků:    {}", order.truss_type)?;
    writeln!(out, "  C-profil:       {}", order.profile)?;
    writeln!(
        out,
        "  Půdorys:        {:.2} x {:.2} m, světlá výška {:.2} m",
        order.length.meters(),
        order.width.meters(),
        order.wall_height.meters()
    )?;
    writeln!(out, "  Velké otvory:   {}", order.openings)?;
    for room in &order.rooms {
        writeln!(
            out,
            "  Místnost {:<6} {:.2} x {:.2} m",
            room.name,
            room.length.meters(),
            room.width.meters()
        )?;
    }
    writeln!(out)?;

    if !breakdown.priceable {
        writeln!(out, "Zakázku nelze vypočítat.")?;
        if let Some(reason) = &breakdown.reason {
            writeln!(out, "  Důvod: {}", reason)?;
        }
        return Ok(out);
    }

    if let Some(w) = &breakdown.weights {
        writeln!(out, "Hmotnosti:")?;
        writeln!(out, "  Stěny:          {:>10.1} kg", w.wall_kg)?;
        writeln!(out, "  Vazníky:        {:>10.1} kg", w.truss_kg)?;
        writeln!(out, "  Silnostěnné:    {:>10.1} kg", w.heavy_steel_kg)?;
        writeln!(out, "  Celkem:         {:>10.1} kg", w.total_kg)?;
        writeln!(out)?;
    }

    writeln!(out, "Cena:")?;
    for (label, value) in breakdown.components() {
        writeln!(out, "  {:<28}{:>16}", label, czk(value.unwrap_or(0.0)))?;
    }
    writeln!(out, "  {:-<44}", "")?;
    writeln!(out, "  {:<28}{:>16}", "Celkem", czk(breakdown.total_czk()))?;
    Ok(out)
}

/// Catalog listing, one entry per line
pub fn catalog_report(catalog: &TrussCatalog) -> Result<String, fmt::Error> {
    let mut out = String::new();
    writeln!(
        out,
        "{:<12} {:<16} {:>8} {:>8}  {:<14} {:>8}",
        "Stavba", "Vazník", "Min m", "Max m", "Kód", "kg/m"
    )?;
    for m in catalog.iter() {
        writeln!(
            out,
            "{:<12} {:<16} {:>8.2} {:>8.2}  {:<14} {:>8.2}",
            m.building_type.code(),
            m.truss_type.code(),
            m.min_width.meters(),
            m.max_width.meters(),
            m.code,
            m.unit_weight.kilograms()
        )?;
    }
    writeln!(out, "{} položek", catalog.len())?;
    Ok(out)
}
