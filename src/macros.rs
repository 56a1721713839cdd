/*
 * Copyright (c) 2025 Hydrus Client API Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

// Copies each optional field of `$opts` whose name matches its wire key into `$params`
macro_rules! push_options {
    ( $params:expr, $opts:expr, [ $( $field:ident ),* $(,)? ] ) => {{
        $(
            $params.insert_opt(stringify!($field), $opts.$field.as_ref())?;
        )*
    }};
}

// Builds the params for an endpoint that only takes a single key
macro_rules! single_param {
    ( $key:expr, $value:expr ) => {{
        let mut params = crate::api::ApiParams::new();
        params.insert($key, $value)?;
        params
    }};
}

pub(crate) use {push_options, single_param};
