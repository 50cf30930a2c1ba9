/*! Integration tests for the bunch library.
 *
 * This test suite is organized as a single integration test binary
 * following the pattern described by matklad in
 * https://matklad.github.io/2021/02/27/delete-cargo-integration-tests.html
 *
 * The module structure mirrors the main library structure:
 * - bunch: Tests for Bunch access, rendering, summaries, copies and persistence
 * - literal: Tests for the literal reader and its error reporting
 */

use tracing_subscriber::EnvFilter;

#[ctor::ctor]
fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("bunch=info".parse().unwrap()))
        .with_test_writer()
        .try_init();
}

mod bunch;
mod helpers;
mod literal;
