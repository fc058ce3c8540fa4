// roomlist/roomlist-core
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use roomlist_utils::id_string;

id_string!(
    /// The id of the logged-in user, e.g. `@alice:example.org`.
    UserId
);
