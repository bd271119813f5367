pub use self::timing::TimingPoint;

mod timing;
