use crate::core::colour_mapping::hsb::Hsb;

pub trait ColourMap {
    type Input;

    fn map(&self, value: Self::Input) -> Hsb;
}
