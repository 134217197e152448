use super::Key;

impl Key for str {
    fn key_bytes(&self) -> impl IntoIterator<Item = u8> + '_ {
        self.bytes()
    }
}

impl Key for String {
    fn key_bytes(&self) -> impl IntoIterator<Item = u8> + '_ {
        self.bytes()
    }
}

impl Key for [u8] {
    fn key_bytes(&self) -> impl IntoIterator<Item = u8> + '_ {
        self.iter().copied()
    }
}

impl Key for Vec<u8> {
    fn key_bytes(&self) -> impl IntoIterator<Item = u8> + '_ {
        self.iter().copied()
    }
}

impl<const N: usize> Key for [u8; N] {
    fn key_bytes(&self) -> impl IntoIterator<Item = u8> + '_ {
        self.iter().copied()
    }
}

impl<K: Key + ?Sized> Key for &K {
    fn key_bytes(&self) -> impl IntoIterator<Item = u8> + '_ {
        (**self).key_bytes()
    }
}
