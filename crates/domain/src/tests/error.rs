// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::DomainError;

#[test]
fn test_domain_error_display() {
    let err: DomainError = DomainError::InvalidName(String::from("test"));
    assert_eq!(format!("{err}"), "Invalid name: test");

    let err: DomainError = DomainError::InvalidDescription(String::from("test"));
    assert_eq!(format!("{err}"), "Invalid description: test");

    let err: DomainError = DomainError::InvalidGroup(String::from("DRAGON"));
    assert_eq!(format!("{err}"), "Invalid group: 'DRAGON'");

    let err: DomainError = DomainError::InvalidKind(String::from("Unicorn"));
    assert_eq!(format!("{err}"), "Invalid animal kind: 'Unicorn'");

    let err: DomainError = DomainError::InvalidId(String::from("abc"));
    assert_eq!(format!("{err}"), "Invalid animal id: 'abc'");
}
