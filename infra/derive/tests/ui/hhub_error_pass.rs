use std::borrow::Cow;

#[derive(Debug, thiserror::Error)]
#[error("storage unavailable")]
struct StorageFault;

#[hhub_derive::hhub_error]
enum RosterError {
    #[error("Not found{}: {message}", format_context(.context))]
    NotFound { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Storage error{}: {source}", format_context(.context))]
    Storage { source: StorageFault, context: Option<Cow<'static, str>> },

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn fail_storage() -> Result<(), StorageFault> {
    Err(StorageFault)
}

fn load() -> Result<(), RosterError> {
    fail_storage().context("Loading heroes")?;
    Ok(())
}

fn lookup() -> Result<(), RosterError> {
    Err(RosterError::NotFound { message: "Hero not found".into(), context: None })
        .context("GET /heroes/7")
}

fn main() {
    let err = load().unwrap_err();
    assert_eq!(err.kind(), "Storage");
    assert_eq!(err.to_string(), "Storage error (Loading heroes): storage unavailable");

    let err = lookup().unwrap_err();
    assert_eq!(err.kind(), "NotFound");
    assert_eq!(err.to_string(), "Not found (GET /heroes/7): Hero not found");

    let err: RosterError = "broken invariant".into();
    assert_eq!(err.kind(), "Internal");

    let err = RosterError::from(StorageFault);
    assert!(matches!(err, RosterError::Storage { context: None, .. }));
}
