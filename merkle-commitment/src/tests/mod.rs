mod test_hasher;
