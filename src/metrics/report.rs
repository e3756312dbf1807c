//! Stdout rendering of the final run report.

use super::RunReport;

pub fn print_report(report: &RunReport) {
    println!("Tempo total gasto: {:?}", report.total_time);
    println!(
        "Quantidade total de requests realizados: {}",
        report.total_requests
    );
    println!(
        "Quantidade de requests com status HTTP 200: {}",
        report.success_count
    );
    println!(
        "Latência (mín/média/máx): {}ms / {}ms / {}ms",
        report.min_latency_ms, report.avg_latency_ms, report.max_latency_ms
    );
    println!("Distribuição dos códigos de status HTTP:");
    for (code, count) in &report.histogram {
        println!("  {}: {}", code, count);
    }
}
