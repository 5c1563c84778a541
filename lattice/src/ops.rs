//! Code generation shared by all vector types.
//!
//! Every operator here works component by component. Nothing crosses element
//! type families: an `Int3` never meets an `f32` through an operator.

macro_rules! impl_vec_common {
    ( $vec:ident, $scalar:ty, $count:literal, [ $first:ident $(, $rest:ident )* ] ) => {
        impl $vec {
            pub const ZERO: Self = Self {
                $first: 0 as $scalar,
                $( $rest: 0 as $scalar, )*
            };
        }

        impl crate::scalar::Components for $vec {
            type Scalar = $scalar;

            const COUNT: usize = $count;

            fn extend_into(&self, out: &mut Vec<Self::Scalar>) {
                out.push(self.$first);
                $( out.push(self.$rest); )*
            }

            fn from_components(components: &[Self::Scalar]) -> Self {
                match components {
                    [$first $(, $rest )*, ..] => Self {
                        $first: *$first,
                        $( $rest: *$rest, )*
                    },
                    _ => panic!(
                        "{} needs {} components, got {}",
                        stringify!($vec),
                        $count,
                        components.len()
                    ),
                }
            }
        }

        impl From<[$scalar; $count]> for $vec {
            fn from(data: [$scalar; $count]) -> Self {
                let [$first $(, $rest )*] = data;
                Self { $first $(, $rest )* }
            }
        }

        impl From<$vec> for [$scalar; $count] {
            fn from(value: $vec) -> Self {
                [value.$first $(, value.$rest )*]
            }
        }

        impl std::fmt::Display for $vec {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.$first)?;
                $( write!(f, ", {}", self.$rest)?; )*
                Ok(())
            }
        }
    };
}

macro_rules! impl_vec_binop {
    ( $vec:ident, $scalar:ty, [ $( $field:ident ),+ ],
      $trait:ident $method:ident, $assign_trait:ident $assign_method:ident, $op:tt ) => {
        impl std::ops::$trait for $vec {
            type Output = Self;

            #[inline]
            fn $method(self, rhs: Self) -> Self::Output {
                Self { $( $field: self.$field $op rhs.$field ),+ }
            }
        }

        impl<'a> std::ops::$trait<&'a $vec> for &'a $vec {
            type Output = $vec;

            #[inline]
            fn $method(self, rhs: &'a $vec) -> Self::Output {
                std::ops::$trait::$method(*self, *rhs)
            }
        }

        impl std::ops::$trait<$scalar> for $vec {
            type Output = Self;

            #[inline]
            fn $method(self, rhs: $scalar) -> Self::Output {
                Self { $( $field: self.$field $op rhs ),+ }
            }
        }

        impl std::ops::$assign_trait for $vec {
            #[inline]
            fn $assign_method(&mut self, rhs: Self) {
                *self = std::ops::$trait::$method(*self, rhs);
            }
        }

        impl std::ops::$assign_trait<$scalar> for $vec {
            #[inline]
            fn $assign_method(&mut self, rhs: $scalar) {
                *self = std::ops::$trait::$method(*self, rhs);
            }
        }
    };
}

macro_rules! impl_vec_ops {
    ( $vec:ident, $scalar:ty, [ $( $field:ident ),+ ] ) => {
        impl_vec_binop!($vec, $scalar, [ $( $field ),+ ], Add add, AddAssign add_assign, +);
        impl_vec_binop!($vec, $scalar, [ $( $field ),+ ], Sub sub, SubAssign sub_assign, -);
        impl_vec_binop!($vec, $scalar, [ $( $field ),+ ], Mul mul, MulAssign mul_assign, *);
        impl_vec_binop!($vec, $scalar, [ $( $field ),+ ], Div div, DivAssign div_assign, /);

        impl std::ops::Neg for $vec {
            type Output = Self;

            #[inline]
            fn neg(self) -> Self::Output {
                Self { $( $field: -self.$field ),+ }
            }
        }
    };
}
