//! Operator-forwarding macros.
//!
//! The borrowed-borrowed impl is the canonical one for every binary
//! operator; these macros forward the owned and mixed combinations to it so
//! each operation module only writes the arithmetic once.

macro_rules! forward_val_val_binop {
    (impl $imp:ident for $res:ty, $method:ident) => {
        impl $imp<$res> for $res {
            type Output = $res;

            #[inline]
            fn $method(self, other: $res) -> $res {
                $imp::$method(&self, &other)
            }
        }
    };
}

macro_rules! forward_val_ref_binop {
    (impl $imp:ident for $res:ty, $method:ident) => {
        impl $imp<&$res> for $res {
            type Output = $res;

            #[inline]
            fn $method(self, other: &$res) -> $res {
                $imp::$method(&self, other)
            }
        }
    };
}

macro_rules! forward_ref_val_binop {
    (impl $imp:ident for $res:ty, $method:ident) => {
        impl $imp<$res> for &$res {
            type Output = $res;

            #[inline]
            fn $method(self, other: $res) -> $res {
                $imp::$method(self, &other)
            }
        }
    };
}

/// Forward everything to the `&a op &b` impl.
macro_rules! forward_all_binop_to_ref_ref {
    (impl $imp:ident for $res:ty, $method:ident) => {
        forward_val_val_binop!(impl $imp for $res, $method);
        forward_val_ref_binop!(impl $imp for $res, $method);
        forward_ref_val_binop!(impl $imp for $res, $method);
    };
}

/// Forward a compound-assignment operator to `a = &a op &b`.
macro_rules! forward_binop_assign {
    (impl $imp:ident for $res:ty, $method:ident, $base:ident, $base_method:ident) => {
        impl $imp<$res> for $res {
            #[inline]
            fn $method(&mut self, other: $res) {
                *self = $base::$base_method(&*self, &other);
            }
        }

        impl $imp<&$res> for $res {
            #[inline]
            fn $method(&mut self, other: &$res) {
                *self = $base::$base_method(&*self, other);
            }
        }
    };
}
