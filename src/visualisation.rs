// src/visualisation.rs

use crate::sweep::SweepResult;
use plotters::prelude::*;

/// Widen a (min, max) pair so degenerate data (all equal, or non-finite)
/// still produces a drawable axis range.
fn padded_range(mut lo: f64, mut hi: f64) -> (f64, f64) {
    if !lo.is_finite() || !hi.is_finite() {
        return (-1.0, 1.0);
    }
    if (hi - lo).abs() < 1e-30 {
        let delta = if hi.abs() < 1e-30 { 1.0 } else { 0.1 * hi.abs() };
        lo -= delta;
        hi += delta;
    } else {
        let margin = 0.1 * (hi - lo);
        lo -= margin;
        hi += margin;
    }
    (lo, hi)
}

/// Plot the free-energy landscape dG(phi) for each swept chi, one line
/// series per chi with a shared legend.
pub fn save_landscape_plot(
    phi: &[f64],
    profiles: &[(f64, Vec<f64>)],
    chi_critical: f64,
    filename: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    if phi.is_empty() || profiles.is_empty() {
        return Ok(()); // nothing to plot
    }

    let mut y_min = f64::INFINITY;
    let mut y_max = f64::NEG_INFINITY;
    for (_, profile) in profiles {
        for &g in profile {
            if g.is_finite() {
                if g < y_min {
                    y_min = g;
                }
                if g > y_max {
                    y_max = g;
                }
            }
        }
    }
    let (y_min, y_max) = padded_range(y_min, y_max);

    let root = BitMapBackend::new(filename, (1024, 768)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .caption(
            format!("Mixing free energy vs composition (chi_c = {:.4})", chi_critical),
            ("sans-serif", 30),
        )
        .set_left_and_bottom_label_area_size(60)
        .build_cartesian_2d(0.0..1.0, y_min..y_max)?;

    chart
        .configure_mesh()
        .x_desc("phi (volume fraction of A)")
        .y_desc("dG_mix / kT")
        .x_labels(10)
        .y_labels(10)
        .label_style(("sans-serif", 16))
        .axis_desc_style(("sans-serif", 18))
        .draw()?;

    for (idx, (chi, profile)) in profiles.iter().enumerate() {
        let color = Palette99::pick(idx);
        chart
            .draw_series(LineSeries::new(
                phi.iter().zip(profile.iter()).map(|(&p, &g)| (p, g)),
                &color,
            ))?
            .label(format!("chi = {:.4}", chi))
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2)));
    }

    chart
        .configure_series_labels()
        .border_style(&BLACK)
        .background_style(&WHITE.mix(0.8))
        .draw()?;

    root.present()?;
    Ok(())
}

/// Plot the phase diagram in the (phi, chi) plane: detected minima (binodal
/// candidates) in red, interpolated spinodal crossings in blue, and a black
/// guide line at the theoretical critical chi.
pub fn save_phase_diagram_plot(
    result: &SweepResult,
    filename: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    if result.minima.is_empty() && result.spinodal.is_empty() {
        return Ok(());
    }

    let mut chi_min = f64::INFINITY;
    let mut chi_max = f64::NEG_INFINITY;
    for p in result.minima.iter().chain(result.spinodal.iter()) {
        if p.chi < chi_min {
            chi_min = p.chi;
        }
        if p.chi > chi_max {
            chi_max = p.chi;
        }
    }
    // Keep the critical line in view when it is close to the swept window.
    if result.chi_critical.is_finite() {
        chi_min = chi_min.min(result.chi_critical);
        chi_max = chi_max.max(result.chi_critical);
    }
    let (chi_min, chi_max) = padded_range(chi_min, chi_max);

    let root = BitMapBackend::new(filename, (1024, 768)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .caption("Flory-Huggins phase diagram", ("sans-serif", 30))
        .set_left_and_bottom_label_area_size(60)
        .build_cartesian_2d(0.0..1.0, chi_min..chi_max)?;

    chart
        .configure_mesh()
        .x_desc("phi (volume fraction of A)")
        .y_desc("chi")
        .x_labels(10)
        .y_labels(10)
        .label_style(("sans-serif", 16))
        .axis_desc_style(("sans-serif", 18))
        .draw()?;

    chart
        .draw_series(
            result
                .minima
                .iter()
                .map(|p| Circle::new((p.phi, p.chi), 3, RED.filled())),
        )?
        .label("free-energy minima (binodal approx.)")
        .legend(|(x, y)| Circle::new((x + 10, y), 3, RED.filled()));

    chart
        .draw_series(
            result
                .spinodal
                .iter()
                .map(|p| Circle::new((p.phi, p.chi), 3, BLUE.filled())),
        )?
        .label("spinodal (d2G = 0)")
        .legend(|(x, y)| Circle::new((x + 10, y), 3, BLUE.filled()));

    chart
        .draw_series(LineSeries::new(
            [(0.0, result.chi_critical), (1.0, result.chi_critical)],
            &BLACK,
        ))?
        .label(format!("chi_c = {:.4}", result.chi_critical))
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &BLACK));

    chart
        .configure_series_labels()
        .border_style(&BLACK)
        .background_style(&WHITE.mix(0.8))
        .draw()?;

    root.present()?;
    Ok(())
}
