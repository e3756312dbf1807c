mod support;

use support::{run_rajada, spawn_http_server};

const RESPONSE_200: &[u8] =
    b"HTTP/1.1 200 OK\r\nContent-Length: 2\r\nConnection: close\r\n\r\nOK";
const RESPONSE_500: &[u8] =
    b"HTTP/1.1 500 Internal Server Error\r\nContent-Length: 0\r\nConnection: close\r\n\r\n";

fn stdout_of(output: &std::process::Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn e2e_reports_success_histogram() -> Result<(), String> {
    let (url, _server) = spawn_http_server(RESPONSE_200)?;

    let output = run_rajada(["-u", &url, "-n", "20", "-c", "4"])?;
    if !output.status.success() {
        return Err(format!(
            "stdout: {}\nstderr: {}",
            stdout_of(&output),
            String::from_utf8_lossy(&output.stderr)
        ));
    }

    let stdout = stdout_of(&output);
    assert!(stdout.contains("Tempo total gasto:"));
    assert!(stdout.contains("Quantidade total de requests realizados: 20"));
    assert!(stdout.contains("Quantidade de requests com status HTTP 200: 20"));
    assert!(stdout.contains("Distribuição dos códigos de status HTTP:"));
    assert!(stdout.contains("  200: 20"));
    Ok(())
}

#[test]
fn e2e_truncates_uneven_budget() -> Result<(), String> {
    let (url, _server) = spawn_http_server(RESPONSE_200)?;

    let output = run_rajada(["-u", &url, "--requests", "10", "--concurrency", "3"])?;
    if !output.status.success() {
        return Err(String::from_utf8_lossy(&output.stderr).into_owned());
    }

    let stdout = stdout_of(&output);
    assert!(stdout.contains("Quantidade total de requests realizados: 9"));
    assert!(stdout.contains("  200: 9"));
    Ok(())
}

#[test]
fn e2e_server_errors_are_recorded_without_retry() -> Result<(), String> {
    let (url, _server) = spawn_http_server(RESPONSE_500)?;

    let output = run_rajada(["-u", &url, "-n", "4", "-c", "2"])?;
    if !output.status.success() {
        return Err(String::from_utf8_lossy(&output.stderr).into_owned());
    }

    let stdout = stdout_of(&output);
    assert!(stdout.contains("Quantidade total de requests realizados: 4"));
    assert!(stdout.contains("Quantidade de requests com status HTTP 200: 0"));
    assert!(stdout.contains("  500: 4"));
    Ok(())
}

#[test]
fn e2e_missing_url_exits_nonzero() -> Result<(), String> {
    let output = run_rajada::<[&str; 0], &str>([])?;
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("--url"));
    Ok(())
}

#[test]
fn e2e_invalid_url_exits_nonzero() -> Result<(), String> {
    let output = run_rajada(["-u", "not a url"])?;
    assert!(!output.status.success());
    Ok(())
}
