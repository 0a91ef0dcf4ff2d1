//! Full user-session test against the live mock server.
//!
//! Starts the mock server on a random port, then drives every operation of
//! the client over real HTTP through the `ureq` transport: health probe,
//! adds, toggle, inline edit, deletes, and the degraded paths when the
//! backend is unreachable.

use todo_client::{HealthStatus, TodoApp, UreqTransport};

fn start_mock_server() -> std::net::SocketAddr {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            mock_server::run(listener).await
        })
        .unwrap();
    });

    addr
}

#[test]
fn user_session_lifecycle() {
    let addr = start_mock_server();
    let transport = UreqTransport::new();
    let mut app = TodoApp::new(&format!("http://{addr}"));

    // Startup: health probe, then first fetch.
    app.check_health(&transport);
    assert_eq!(app.state().health(), HealthStatus::Healthy);
    app.refresh(&transport);
    assert!(app.state().tasks().is_empty(), "expected empty list");

    // A whitespace-only draft changes nothing.
    app.set_draft("   ");
    app.add_task(&transport);
    assert!(app.state().tasks().is_empty());
    assert_eq!(app.state().draft(), "   ");

    // Two real adds; the snapshot follows server order.
    app.set_draft("Buy milk");
    app.add_task(&transport);
    app.set_draft("Walk dog");
    app.add_task(&transport);
    assert_eq!(app.state().draft(), "");
    let texts: Vec<&str> = app.state().tasks().iter().map(|t| t.text.as_str()).collect();
    assert_eq!(texts, vec!["Buy milk", "Walk dog"]);
    assert!(app.state().tasks().iter().all(|t| !t.done));
    let first_id = app.state().tasks()[0].id;
    let second_id = app.state().tasks()[1].id;

    // Toggle the first task; the re-fetched snapshot reflects it.
    app.toggle_task(first_id, false, &transport);
    assert!(app.state().tasks()[0].done);
    assert!(!app.state().tasks()[1].done);

    // Inline-edit the second task; its done flag is untouched.
    app.start_edit(second_id, "Walk dog");
    app.set_edit_buffer("Walk cat");
    app.save_edit(&transport);
    assert!(app.state().edit().is_none());
    assert_eq!(app.state().tasks()[1].text, "Walk cat");
    assert!(!app.state().tasks()[1].done);

    // Delete the first task.
    app.delete_task(first_id, &transport);
    let texts: Vec<&str> = app.state().tasks().iter().map(|t| t.text.as_str()).collect();
    assert_eq!(texts, vec!["Walk cat"]);

    // Deleting a task that does not exist still re-fetches; the snapshot
    // stays a true view of the server.
    app.delete_task(9999, &transport);
    assert_eq!(app.state().tasks().len(), 1);
}

#[test]
fn unreachable_backend_degrades_without_panicking() {
    // Nothing listens here; every request fails at the transport level.
    let transport = UreqTransport::new();
    let mut app = TodoApp::new("http://127.0.0.1:1");

    app.check_health(&transport);
    assert_eq!(app.state().health(), HealthStatus::Unreachable);

    app.refresh(&transport);
    assert!(app.state().tasks().is_empty());

    // Mutations still run their re-fetch and leave the degraded empty list.
    app.set_draft("Buy milk");
    app.add_task(&transport);
    assert_eq!(app.state().draft(), "");
    assert!(app.state().tasks().is_empty());

    app.delete_task(1, &transport);
    assert!(app.state().tasks().is_empty());
}
