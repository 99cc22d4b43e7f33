use plotters::prelude::*;
use vorometric::generators;
use vorometric::{Canvas, Diagram, DiagramConfig, MetricConfig, Point};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let canvas = Canvas::default();

    run_example("order1_euclidean.svg", MetricConfig::euclidean(), 1)?;
    run_example("order2_manhattan.svg", MetricConfig::manhattan(), 2)?;
    run_example("order3_minkowski.svg", MetricConfig::minkowski(3.0), 3)?;
    run_example("order1_hilbert.svg", MetricConfig::hilbert(canvas), 1)?;

    Ok(())
}

fn run_example(filename: &str, metric: MetricConfig, order: usize) -> Result<(), Box<dyn std::error::Error>> {
    let canvas = Canvas::default();
    let root = SVGBackend::new(filename, (canvas.width as u32, canvas.height as u32)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .build_cartesian_2d(0.0..canvas.width, 0.0..canvas.height)?;

    let config = DiagramConfig::default()
        .with_canvas(canvas)
        .with_metric(metric)
        .with_resolution(4.0);
    let mut diagram = Diagram::new(config);
    diagram.set_sites(generators::random_seeded(24, canvas, 2024));
    // The order is clamped against the site count, so set it once the sites exist.
    diagram.set_order(order);

    // Draw regions
    for (i, region) in diagram.regions().iter().enumerate() {
        let hull = region.hull();
        if hull.len() < 3 {
            continue;
        }
        let mut poly: Vec<(f64, f64)> = hull.iter().map(|p| (p.x, p.y)).collect();
        let color = Palette99::pick(i);

        chart.draw_series(std::iter::once(Polygon::new(poly.clone(), color.mix(0.3).filled())))?;
        poly.push(poly[0]);
        chart.draw_series(std::iter::once(PathElement::new(poly, BLACK.mix(0.5))))?;
    }

    // Draw sites
    let sites: Vec<(f64, f64)> = diagram.sites().iter().map(|p: &Point| (p.x, p.y)).collect();
    chart.draw_series(sites.iter().map(|&p| Circle::new(p, 3, RED.filled())))?;

    root.present()?;
    println!("{} regions ({} order {}) saved to {}", diagram.regions().len(), diagram.config().metric.kind, diagram.order(), filename);
    Ok(())
}
