/// A value made of a fixed number of scalar components, stored in field order.
pub trait Components: Copy {
    type Scalar: Copy;

    const COUNT: usize;

    /// Appends the components to `out` in field order.
    fn extend_into(&self, out: &mut Vec<Self::Scalar>);

    /// Builds a value from the leading `COUNT` entries of `components`.
    ///
    /// # Panics
    ///
    /// Panics if `components` holds fewer than `COUNT` entries.
    fn from_components(components: &[Self::Scalar]) -> Self;
}

macro_rules! impl_nums_components {
    ( $( $num:ty )+ ) => {
        $(
            impl Components for $num {
                type Scalar = $num;

                const COUNT: usize = 1;

                fn extend_into(&self, out: &mut Vec<Self::Scalar>) {
                    out.push(*self);
                }

                fn from_components(components: &[Self::Scalar]) -> Self {
                    components[0]
                }
            }
        )+
    };
}

impl_nums_components! { f32 }
