use super::*;

#[cfg(unix)]
#[test]
fn cat_echoes_lines_back() {
    let command = vec!["cat".to_string()];
    let mut transport = ChildTransport::spawn(&command, &ProcessOptions::default()).unwrap();

    transport.send_line("white").unwrap();
    assert_eq!(transport.recv_line().unwrap(), "white");

    transport.send_line("e2e4").unwrap();
    assert_eq!(transport.recv_line().unwrap(), "e2e4");
}

#[cfg(unix)]
#[test]
fn eof_is_process_closed() {
    let command = vec!["true".to_string()];
    let mut transport = ChildTransport::spawn(&command, &ProcessOptions::default()).unwrap();

    assert!(matches!(
        transport.recv_line(),
        Err(EngineError::ProcessClosed)
    ));
}

#[test]
fn empty_command_is_rejected() {
    let result = ChildTransport::spawn(&[], &ProcessOptions::default());
    assert!(matches!(result, Err(EngineError::Protocol(_))));
}

#[test]
fn missing_program_is_an_io_error() {
    let command = vec!["definitely-not-a-real-engine-binary".to_string()];
    let result = ChildTransport::spawn(&command, &ProcessOptions::default());
    assert!(matches!(result, Err(EngineError::Io(_))));
}
