// SPDX-License-Identifier: MIT OR Apache-2.0

//! Shared fixtures and helpers for the integration tests.

use std::io::Write;
use std::sync::Once;

/// A configuration file exercising every accessor and most edge cases.
#[allow(dead_code)]
pub const TEST_CONFIG: &str = r#"# test configuration for the accessor suite
integer1:1
integer2: 2
integer3 = 3
integer4=4
   integer5    :     5
integer6: 6 # six
integer7 = -7
integer8: -8
integer9: 09
integer9a: 010
integer10: 3.5
integer11: abc
integer12: 1 2
integer13: 13
integer13: 14
	integer15:	15

string1: hello
string2: 100
string3: This is a multiword string
string4: "
string5: ""
string6: "quoted # not protected"

uint-param1: 99
uint-param2: -5
uint-param3: lots

double_param: 3.14159
double_param2 = 2001
double_param-3: "3.0"
double_param-4: 1.2.3
double_param5: -0.001
double_param6: +0.001
double_param7: .5
double_param8: -.5
double_param9: +.5

bool1: yes
bool2: no
bool3: true
bool4: false
bool5: YES
bool6: NO
bool7: TRUE
bool8: FALSE
bool9: maybe
bool10: 1
bool11: 0

string_vals: alpha
string_vals: bravo
string_vals: delta
string_vals2: alpha
string_vals2: "bravo delta"
string_vals2: gamma

int_vec: 1 2 3 -4
uint_vec: 10 20 30
double_vec: 0.5 1.5 -2
bool_vec: yes NO 1
word_vec: red green   blue
bad_vec: 1 two 3
empty_vec:

key.with'': primes
"#;

/// Writes `content` to a temporary file that is deleted when dropped.
#[allow(dead_code)]
pub fn create_temp_config(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "{}", content).unwrap();
    file.flush().unwrap();
    file
}

/// Installs a test subscriber so `tracing` output shows up with `--nocapture`.
#[allow(dead_code)]
pub fn init_tracing() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_test_writer()
            .with_max_level(tracing::Level::TRACE)
            .try_init();
    });
}
